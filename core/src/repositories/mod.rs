//! Repository interfaces and the in-memory backend.

mod activity;
mod base;
mod booking;
mod destination;
mod passenger;
mod travel_package;

pub mod memory;
pub mod storage;

#[cfg(test)]
mod tests;

pub use activity::ActivityRepository;
pub use base::Repository;
pub use booking::BookingRepository;
pub use destination::DestinationRepository;
pub use memory::{
    InMemoryActivityRepository, InMemoryBookingRepository, InMemoryDestinationRepository,
    InMemoryPassengerRepository, InMemoryTable, InMemoryTravelPackageRepository,
};
pub use passenger::PassengerRepository;
pub use storage::{InMemoryStorage, Storage};
pub use travel_package::TravelPackageRepository;
