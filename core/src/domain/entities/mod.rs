//! Domain entities representing core business objects.

mod activity;
mod booking;
mod destination;
mod passenger;
mod travel_package;

#[cfg(test)]
mod tests;

pub use activity::{Activity, ActivityId};
pub use booking::{Booking, BookingId, BookingStatus};
pub use destination::{Destination, DestinationId};
pub use passenger::{Passenger, PassengerId, PassengerType};
pub use travel_package::{PackageId, TravelPackage};

/// An entity whose identifier is assigned by the repository on creation
pub trait Entity: Clone + Send + Sync {
    /// Human readable resource name used in error messages
    const RESOURCE: &'static str;

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);
}

/// Placeholder identifier carried by entities that have not been persisted yet
pub const UNASSIGNED_ID: i64 = 0;
