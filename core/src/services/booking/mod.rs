//! Booking creation, status changes and tier pricing.

pub mod config;
pub mod pricing;
pub mod service;

#[cfg(test)]
mod tests;

pub use config::{BookingServiceConfig, DEFAULT_GOLD_DISCOUNT_RATE};
pub use pricing::{discounted_cost, refund_amount};
pub use service::BookingService;
