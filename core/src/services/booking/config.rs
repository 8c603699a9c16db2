//! Configuration for the booking service

use ta_shared::BookingConfig;

/// Default fraction of the activity cost GOLD passengers do not pay
pub const DEFAULT_GOLD_DISCOUNT_RATE: f64 = 0.10;

/// Configuration for the booking service
#[derive(Debug, Clone, PartialEq)]
pub struct BookingServiceConfig {
    /// Discount applied to GOLD passengers, between 0.0 and 1.0
    pub gold_discount_rate: f64,
}

impl Default for BookingServiceConfig {
    fn default() -> Self {
        Self {
            gold_discount_rate: DEFAULT_GOLD_DISCOUNT_RATE,
        }
    }
}

impl From<&BookingConfig> for BookingServiceConfig {
    fn from(config: &BookingConfig) -> Self {
        Self {
            gold_discount_rate: config.gold_discount_rate.clamp(0.0, 1.0),
        }
    }
}
