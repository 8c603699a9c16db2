//! Booking and pricing configuration

use serde::{Deserialize, Serialize};

/// Pricing knobs applied when passengers book or cancel activities
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookingConfig {
    /// Fraction of the activity cost GOLD passengers do not pay (0.0 to 1.0)
    #[serde(default = "default_gold_discount_rate")]
    pub gold_discount_rate: f64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            gold_discount_rate: default_gold_discount_rate(),
        }
    }
}

impl BookingConfig {
    /// Read `GOLD_DISCOUNT_RATE`; values outside 0.0..=1.0 are ignored
    pub fn from_env() -> Self {
        let gold_discount_rate = std::env::var("GOLD_DISCOUNT_RATE")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|rate| (0.0..=1.0).contains(rate))
            .unwrap_or_else(default_gold_discount_rate);

        Self { gold_discount_rate }
    }
}

fn default_gold_discount_rate() -> f64 {
    0.10
}
