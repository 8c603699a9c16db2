//! Booking entity: a passenger's reservation of an activity.

use serde::{Deserialize, Serialize};

use super::{ActivityId, DestinationId, Entity, PassengerId, UNASSIGNED_ID};

pub type BookingId = i64;

/// Lifecycle of a booking. `Cancelled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// Persisted representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, BookingStatus::Cancelled)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(BookingStatus::Pending),
            "CONFIRMED" => Ok(BookingStatus::Confirmed),
            "CANCELLED" | "CANCELED" => Ok(BookingStatus::Cancelled),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

/// A reservation of one place on an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier, assigned on creation
    pub booking_id: BookingId,

    pub passenger_id: PassengerId,

    pub destination_id: DestinationId,

    pub activity_id: ActivityId,

    pub status: BookingStatus,
}

impl Booking {
    /// Creates a pending booking that has not been persisted yet
    pub fn new(passenger_id: PassengerId, destination_id: DestinationId, activity_id: ActivityId) -> Self {
        Self {
            booking_id: UNASSIGNED_ID,
            passenger_id,
            destination_id,
            activity_id,
            status: BookingStatus::Pending,
        }
    }
}

impl Entity for Booking {
    const RESOURCE: &'static str = "Booking";

    fn id(&self) -> i64 {
        self.booking_id
    }

    fn set_id(&mut self, id: i64) {
        self.booking_id = id;
    }
}
