//! Booking-specific error types
//!
//! These errors represent the business rules that can reject a booking or a
//! status change. The HTTP layer maps them to conflict responses.

use thiserror::Error;

use crate::domain::entities::{ActivityId, BookingId};

/// Booking rule violations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Capacity is full for activity {activity_id}")]
    CapacityFull { activity_id: ActivityId },

    #[error(
        "Insufficient balance for activity {activity_id}: required {required:.2}, available {available:.2}"
    )]
    InsufficientBalance {
        activity_id: ActivityId,
        required: f64,
        available: f64,
    },

    #[error("Booking {booking_id} is already cancelled")]
    AlreadyCancelled { booking_id: BookingId },
}

impl BookingError {
    /// Stable error code for API clients
    pub fn code(&self) -> &'static str {
        use ta_shared::error_codes;

        match self {
            BookingError::CapacityFull { .. } => error_codes::CAPACITY_FULL,
            BookingError::InsufficientBalance { .. } => error_codes::INSUFFICIENT_BALANCE,
            BookingError::AlreadyCancelled { .. } => error_codes::BOOKING_ALREADY_CANCELLED,
        }
    }
}
