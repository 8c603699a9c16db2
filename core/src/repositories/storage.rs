//! Storage backends group one repository per entity type.

use async_trait::async_trait;
use std::sync::Arc;

use super::memory::{
    InMemoryActivityRepository, InMemoryBookingRepository, InMemoryDestinationRepository,
    InMemoryPassengerRepository, InMemoryTravelPackageRepository,
};
use crate::errors::DomainResult;

use super::{
    ActivityRepository, BookingRepository, DestinationRepository, PassengerRepository,
    TravelPackageRepository,
};

/// A complete set of repositories backed by the same store
#[async_trait]
pub trait Storage: Send + Sync + 'static {
    type Activities: ActivityRepository + 'static;
    type Bookings: BookingRepository + 'static;
    type Destinations: DestinationRepository + 'static;
    type Passengers: PassengerRepository + 'static;
    type Packages: TravelPackageRepository + 'static;

    fn activities(&self) -> Arc<Self::Activities>;

    fn bookings(&self) -> Arc<Self::Bookings>;

    fn destinations(&self) -> Arc<Self::Destinations>;

    fn passengers(&self) -> Arc<Self::Passengers>;

    fn packages(&self) -> Arc<Self::Packages>;

    /// Short backend name for logs and health output
    fn backend_name(&self) -> &'static str;

    /// Verify the backing store is reachable
    async fn health_check(&self) -> DomainResult<()> {
        Ok(())
    }
}

/// Process-local storage; contents are lost on shutdown
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    activities: Arc<InMemoryActivityRepository>,
    bookings: Arc<InMemoryBookingRepository>,
    destinations: Arc<InMemoryDestinationRepository>,
    passengers: Arc<InMemoryPassengerRepository>,
    packages: Arc<InMemoryTravelPackageRepository>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    type Activities = InMemoryActivityRepository;
    type Bookings = InMemoryBookingRepository;
    type Destinations = InMemoryDestinationRepository;
    type Passengers = InMemoryPassengerRepository;
    type Packages = InMemoryTravelPackageRepository;

    fn activities(&self) -> Arc<Self::Activities> {
        Arc::clone(&self.activities)
    }

    fn bookings(&self) -> Arc<Self::Bookings> {
        Arc::clone(&self.bookings)
    }

    fn destinations(&self) -> Arc<Self::Destinations> {
        Arc::clone(&self.destinations)
    }

    fn passengers(&self) -> Arc<Self::Passengers> {
        Arc::clone(&self.passengers)
    }

    fn packages(&self) -> Arc<Self::Packages> {
        Arc::clone(&self.packages)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
