//! Tier pricing.
//!
//! | tier     | pays                          |
//! |----------|-------------------------------|
//! | STANDARD | full cost                     |
//! | GOLD     | cost * (1 - gold discount)    |
//! | PREMIUM  | nothing                       |
//!
//! A cancellation refunds exactly what the tier paid.

use crate::domain::entities::PassengerType;

use super::config::BookingServiceConfig;

/// Price a passenger of the given tier pays for an activity
pub fn discounted_cost(passenger_type: PassengerType, cost: f64, config: &BookingServiceConfig) -> f64 {
    match passenger_type {
        PassengerType::Standard => cost,
        PassengerType::Gold => cost * (1.0 - config.gold_discount_rate),
        PassengerType::Premium => 0.0,
    }
}

/// Amount credited back when a booking is cancelled
pub fn refund_amount(passenger_type: PassengerType, cost: f64, config: &BookingServiceConfig) -> f64 {
    discounted_cost(passenger_type, cost, config)
}
