//! Wiring of all services over one storage backend

use std::sync::Arc;

use crate::repositories::Storage;

use super::{
    ActivityService, BookingService, BookingServiceConfig, DestinationService, PassengerService,
    TravelPackageService,
};

pub type DestinationServiceOf<S> =
    DestinationService<<S as Storage>::Destinations, <S as Storage>::Activities>;
pub type ActivityServiceOf<S> =
    ActivityService<<S as Storage>::Activities, <S as Storage>::Destinations>;
pub type TravelPackageServiceOf<S> = TravelPackageService<
    <S as Storage>::Packages,
    <S as Storage>::Destinations,
    <S as Storage>::Activities,
>;
pub type PassengerServiceOf<S> = PassengerService<<S as Storage>::Passengers>;
pub type BookingServiceOf<S> = BookingService<
    <S as Storage>::Bookings,
    <S as Storage>::Passengers,
    <S as Storage>::Activities,
>;

/// All application services, built from a single [`Storage`]
pub struct ServiceRegistry<S: Storage> {
    pub destinations: Arc<DestinationServiceOf<S>>,
    pub activities: Arc<ActivityServiceOf<S>>,
    pub packages: Arc<TravelPackageServiceOf<S>>,
    pub passengers: Arc<PassengerServiceOf<S>>,
    pub bookings: Arc<BookingServiceOf<S>>,
    storage: Arc<S>,
}

impl<S: Storage> ServiceRegistry<S> {
    pub fn new(storage: Arc<S>, booking_config: BookingServiceConfig) -> Self {
        Self {
            destinations: Arc::new(DestinationService::new(
                storage.destinations(),
                storage.activities(),
            )),
            activities: Arc::new(ActivityService::new(
                storage.activities(),
                storage.destinations(),
            )),
            packages: Arc::new(TravelPackageService::new(
                storage.packages(),
                storage.destinations(),
                storage.activities(),
            )),
            passengers: Arc::new(PassengerService::new(storage.passengers())),
            bookings: Arc::new(BookingService::new(
                storage.bookings(),
                storage.passengers(),
                storage.activities(),
                booking_config,
            )),
            storage,
        }
    }

    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }
}

impl<S: Storage> Clone for ServiceRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            destinations: Arc::clone(&self.destinations),
            activities: Arc::clone(&self.activities),
            packages: Arc::clone(&self.packages),
            passengers: Arc::clone(&self.passengers),
            bookings: Arc::clone(&self.bookings),
            storage: Arc::clone(&self.storage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{BookingStatus, PassengerType};
    use crate::repositories::InMemoryStorage;
    use crate::services::NewActivity;

    #[tokio::test]
    async fn test_services_share_storage() {
        let registry = ServiceRegistry::new(
            Arc::new(InMemoryStorage::new()),
            BookingServiceConfig::default(),
        );

        let destination = registry.destinations.create_destination("Tromso").await.unwrap();
        let activity = registry
            .activities
            .create_activity(NewActivity {
                name: "Northern lights chase".to_string(),
                description: String::new(),
                cost: 150.0,
                capacity: 1,
                destination_id: destination.destination_id,
            })
            .await
            .unwrap();
        let passenger = registry
            .passengers
            .create_passenger("Sol", "+4791234567", PassengerType::Standard, 150.0)
            .await
            .unwrap();

        let booking = registry
            .bookings
            .create_booking(passenger.passenger_id, activity.activity_id, destination.destination_id)
            .await
            .unwrap();

        let details = registry
            .destinations
            .get_destination_details(destination.destination_id)
            .await
            .unwrap();
        assert_eq!(details.activities[0].capacity, 0);
        assert!(registry.activities.available_activities().await.unwrap().is_empty());

        registry
            .bookings
            .update_booking_status(booking.booking_id, BookingStatus::Cancelled)
            .await
            .unwrap();
        let passenger = registry
            .passengers
            .get_passenger_details(passenger.passenger_id)
            .await
            .unwrap();
        assert_eq!(passenger.balance, 150.0);
        assert_eq!(registry.storage().backend_name(), "memory");
    }
}
