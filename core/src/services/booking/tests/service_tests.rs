//! Unit tests for booking service

use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::domain::entities::{
    Activity, ActivityId, BookingStatus, DestinationId, Passenger, PassengerId, PassengerType,
};
use crate::errors::{BookingError, DomainError};
use crate::repositories::{
    InMemoryActivityRepository, InMemoryBookingRepository, InMemoryPassengerRepository, Repository,
};
use crate::services::booking::{BookingService, BookingServiceConfig};

use super::mocks::UnavailableBookingRepository;

const DESTINATION: DestinationId = 1;

struct Fixture {
    service: BookingService<InMemoryBookingRepository, InMemoryPassengerRepository, InMemoryActivityRepository>,
    bookings: Arc<InMemoryBookingRepository>,
    passengers: Arc<InMemoryPassengerRepository>,
    activities: Arc<InMemoryActivityRepository>,
}

impl Fixture {
    fn new() -> Self {
        let bookings = Arc::new(InMemoryBookingRepository::new());
        let passengers = Arc::new(InMemoryPassengerRepository::new());
        let activities = Arc::new(InMemoryActivityRepository::new());
        let service = BookingService::new(
            Arc::clone(&bookings),
            Arc::clone(&passengers),
            Arc::clone(&activities),
            BookingServiceConfig::default(),
        );
        Self {
            service,
            bookings,
            passengers,
            activities,
        }
    }

    async fn passenger(&self, passenger_type: PassengerType, balance: f64) -> PassengerId {
        self.passengers
            .create(Passenger::new("Traveller", "+61412345678", passenger_type, balance))
            .await
            .unwrap()
            .passenger_id
    }

    async fn activity(&self, cost: f64, capacity: i32) -> ActivityId {
        self.activities
            .create(Activity::new("Sea kayaking", "Half day", cost, capacity, DESTINATION))
            .await
            .unwrap()
            .activity_id
    }

    async fn balance(&self, id: PassengerId) -> f64 {
        self.passengers.find_by_id(id).await.unwrap().unwrap().balance
    }

    async fn capacity(&self, id: ActivityId) -> i32 {
        self.activities.find_by_id(id).await.unwrap().unwrap().capacity
    }
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[tokio::test]
async fn test_standard_passenger_pays_full_price() {
    let f = Fixture::new();
    let passenger_id = f.passenger(PassengerType::Standard, 100.0).await;
    let activity_id = f.activity(40.0, 5).await;

    let booking = f
        .service
        .create_booking(passenger_id, activity_id, DESTINATION)
        .await
        .unwrap();

    assert!(booking.booking_id > 0);
    assert_eq!(booking.status, BookingStatus::Pending);
    assert!(approx_eq(f.balance(passenger_id).await, 60.0));
    assert_eq!(f.capacity(activity_id).await, 4);

    let passenger = f.passengers.find_by_id(passenger_id).await.unwrap().unwrap();
    assert_eq!(passenger.bookings.len(), 1);
    assert_eq!(passenger.bookings[0].booking_id, booking.booking_id);
}

#[tokio::test]
async fn test_gold_passenger_gets_discount() {
    let f = Fixture::new();
    let passenger_id = f.passenger(PassengerType::Gold, 100.0).await;
    let activity_id = f.activity(100.0, 5).await;

    f.service
        .create_booking(passenger_id, activity_id, DESTINATION)
        .await
        .unwrap();

    assert!(approx_eq(f.balance(passenger_id).await, 10.0));
}

#[tokio::test]
async fn test_premium_passenger_books_for_free() {
    let f = Fixture::new();
    let passenger_id = f.passenger(PassengerType::Premium, 0.0).await;
    let activity_id = f.activity(500.0, 1).await;

    f.service
        .create_booking(passenger_id, activity_id, DESTINATION)
        .await
        .unwrap();

    assert!(approx_eq(f.balance(passenger_id).await, 0.0));
    assert_eq!(f.capacity(activity_id).await, 0);
}

#[tokio::test]
async fn test_full_activity_is_rejected_without_writes() {
    let f = Fixture::new();
    let passenger_id = f.passenger(PassengerType::Standard, 100.0).await;
    let activity_id = f.activity(10.0, 0).await;

    let result = f.service.create_booking(passenger_id, activity_id, DESTINATION).await;

    match result {
        Err(DomainError::Booking(BookingError::CapacityFull { activity_id: id })) => {
            assert_eq!(id, activity_id);
        }
        other => panic!("Expected CapacityFull, got {:?}", other),
    }
    assert!(approx_eq(f.balance(passenger_id).await, 100.0));
    assert_eq!(f.capacity(activity_id).await, 0);
    assert!(f.bookings.is_empty().await);
}

#[tokio::test]
async fn test_insufficient_balance_is_rejected_without_writes() {
    let f = Fixture::new();
    let passenger_id = f.passenger(PassengerType::Standard, 30.0).await;
    let activity_id = f.activity(45.0, 3).await;

    let result = f.service.create_booking(passenger_id, activity_id, DESTINATION).await;

    match result {
        Err(DomainError::Booking(BookingError::InsufficientBalance {
            required, available, ..
        })) => {
            assert!(approx_eq(required, 45.0));
            assert!(approx_eq(available, 30.0));
        }
        other => panic!("Expected InsufficientBalance, got {:?}", other),
    }
    assert!(approx_eq(f.balance(passenger_id).await, 30.0));
    assert_eq!(f.capacity(activity_id).await, 3);
    assert!(f.bookings.is_empty().await);
}

#[tokio::test]
async fn test_exact_balance_is_enough() {
    let f = Fixture::new();
    let passenger_id = f.passenger(PassengerType::Standard, 45.0).await;
    let activity_id = f.activity(45.0, 3).await;

    f.service
        .create_booking(passenger_id, activity_id, DESTINATION)
        .await
        .unwrap();
    assert!(approx_eq(f.balance(passenger_id).await, 0.0));
}

#[tokio::test]
async fn test_unknown_passenger_or_activity() {
    let f = Fixture::new();
    let passenger_id = f.passenger(PassengerType::Standard, 100.0).await;
    let activity_id = f.activity(10.0, 3).await;

    let result = f.service.create_booking(999, activity_id, DESTINATION).await;
    assert!(matches!(result, Err(DomainError::NotFound { ref resource, .. }) if resource == "Passenger"));

    let result = f.service.create_booking(passenger_id, 999, DESTINATION).await;
    assert!(matches!(result, Err(DomainError::NotFound { ref resource, .. }) if resource == "Activity"));

    assert!(f.bookings.is_empty().await);
    assert_eq!(f.capacity(activity_id).await, 3);
}

#[tokio::test]
async fn test_destination_must_match_activity() {
    let f = Fixture::new();
    let passenger_id = f.passenger(PassengerType::Standard, 100.0).await;
    let activity_id = f.activity(10.0, 3).await;

    let result = f
        .service
        .create_booking(passenger_id, activity_id, DESTINATION + 1)
        .await;

    assert!(matches!(result, Err(DomainError::Validation { .. })));
    assert!(f.bookings.is_empty().await);
}

#[tokio::test]
async fn test_cancel_restores_balance_and_capacity() {
    let f = Fixture::new();
    let passenger_id = f.passenger(PassengerType::Gold, 200.0).await;
    let activity_id = f.activity(80.0, 2).await;

    let booking = f
        .service
        .create_booking(passenger_id, activity_id, DESTINATION)
        .await
        .unwrap();
    let cancelled = f
        .service
        .update_booking_status(booking.booking_id, BookingStatus::Cancelled)
        .await
        .unwrap();

    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    assert!(approx_eq(f.balance(passenger_id).await, 200.0));
    assert_eq!(f.capacity(activity_id).await, 2);

    let passenger = f.passengers.find_by_id(passenger_id).await.unwrap().unwrap();
    assert!(passenger.bookings.is_empty());

    let stored = f.service.get_booking_details(booking.booking_id).await.unwrap();
    assert_eq!(stored.status, BookingStatus::Cancelled);
}

#[tokio::test]
async fn test_confirm_keeps_balance_and_capacity() {
    let f = Fixture::new();
    let passenger_id = f.passenger(PassengerType::Standard, 100.0).await;
    let activity_id = f.activity(25.0, 4).await;

    let booking = f
        .service
        .create_booking(passenger_id, activity_id, DESTINATION)
        .await
        .unwrap();
    let confirmed = f
        .service
        .update_booking_status(booking.booking_id, BookingStatus::Confirmed)
        .await
        .unwrap();

    assert_eq!(confirmed.status, BookingStatus::Confirmed);
    assert!(approx_eq(f.balance(passenger_id).await, 75.0));
    assert_eq!(f.capacity(activity_id).await, 3);
}

#[tokio::test]
async fn test_confirm_updates_passenger_copy() {
    let f = Fixture::new();
    let passenger_id = f.passenger(PassengerType::Gold, 100.0).await;
    let activity_id = f.activity(40.0, 4).await;

    let booking = f
        .service
        .create_booking(passenger_id, activity_id, DESTINATION)
        .await
        .unwrap();
    f.service
        .update_booking_status(booking.booking_id, BookingStatus::Confirmed)
        .await
        .unwrap();

    let passenger = f.passengers.find_by_id(passenger_id).await.unwrap().unwrap();
    assert_eq!(passenger.bookings.len(), 1);
    assert_eq!(passenger.bookings[0].booking_id, booking.booking_id);
    assert_eq!(passenger.bookings[0].status, BookingStatus::Confirmed);
    assert!(approx_eq(passenger.balance, 64.0));
}

#[tokio::test]
async fn test_cancel_refunds_current_activity_cost() {
    let f = Fixture::new();
    let passenger_id = f.passenger(PassengerType::Standard, 100.0).await;
    let activity_id = f.activity(100.0, 4).await;

    let booking = f
        .service
        .create_booking(passenger_id, activity_id, DESTINATION)
        .await
        .unwrap();
    assert!(approx_eq(f.balance(passenger_id).await, 0.0));

    let mut activity = f.activities.find_by_id(activity_id).await.unwrap().unwrap();
    activity.cost = 80.0;
    f.activities.update(activity).await.unwrap();

    f.service
        .update_booking_status(booking.booking_id, BookingStatus::Cancelled)
        .await
        .unwrap();

    assert!(approx_eq(f.balance(passenger_id).await, 80.0));
}

#[tokio::test]
async fn test_cancel_at_max_capacity_changes_nothing() {
    let f = Fixture::new();
    let passenger_id = f.passenger(PassengerType::Standard, 100.0).await;
    let activity_id = f.activity(25.0, 4).await;

    let booking = f
        .service
        .create_booking(passenger_id, activity_id, DESTINATION)
        .await
        .unwrap();

    let mut activity = f.activities.find_by_id(activity_id).await.unwrap().unwrap();
    activity.capacity = i32::MAX;
    f.activities.update(activity).await.unwrap();

    let result = f
        .service
        .update_booking_status(booking.booking_id, BookingStatus::Cancelled)
        .await;
    assert!(matches!(result, Err(DomainError::BusinessRule { .. })));

    let stored = f.service.get_booking_details(booking.booking_id).await.unwrap();
    assert_eq!(stored.status, BookingStatus::Pending);
    assert!(approx_eq(f.balance(passenger_id).await, 75.0));
    assert_eq!(f.capacity(activity_id).await, i32::MAX);

    let passenger = f.passengers.find_by_id(passenger_id).await.unwrap().unwrap();
    assert_eq!(passenger.bookings.len(), 1);
}

#[tokio::test]
async fn test_cancelled_booking_is_terminal() {
    let f = Fixture::new();
    let passenger_id = f.passenger(PassengerType::Standard, 100.0).await;
    let activity_id = f.activity(25.0, 4).await;

    let booking = f
        .service
        .create_booking(passenger_id, activity_id, DESTINATION)
        .await
        .unwrap();
    f.service
        .update_booking_status(booking.booking_id, BookingStatus::Cancelled)
        .await
        .unwrap();

    for status in [BookingStatus::Cancelled, BookingStatus::Confirmed] {
        let result = f.service.update_booking_status(booking.booking_id, status).await;
        assert!(matches!(
            result,
            Err(DomainError::Booking(BookingError::AlreadyCancelled { .. }))
        ));
    }

    // No double refund
    assert!(approx_eq(f.balance(passenger_id).await, 100.0));
    assert_eq!(f.capacity(activity_id).await, 4);
}

#[tokio::test]
async fn test_unknown_booking_is_not_found() {
    let f = Fixture::new();

    let result = f.service.update_booking_status(5, BookingStatus::Confirmed).await;
    assert!(result.unwrap_err().is_not_found());
    assert!(f.service.get_booking_details(5).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_passenger_bookings_keeps_history() {
    let f = Fixture::new();
    let passenger_id = f.passenger(PassengerType::Standard, 100.0).await;
    let activity_id = f.activity(10.0, 4).await;

    let first = f
        .service
        .create_booking(passenger_id, activity_id, DESTINATION)
        .await
        .unwrap();
    f.service
        .create_booking(passenger_id, activity_id, DESTINATION)
        .await
        .unwrap();
    f.service
        .update_booking_status(first.booking_id, BookingStatus::Cancelled)
        .await
        .unwrap();

    let history = f.service.passenger_bookings(passenger_id).await.unwrap();
    assert_eq!(history.len(), 2);
    assert!(history[0].status.is_cancelled());

    assert!(f.service.passenger_bookings(404).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_booking_store_failure_leaves_passenger_untouched() {
    let passengers = Arc::new(InMemoryPassengerRepository::new());
    let activities = Arc::new(InMemoryActivityRepository::new());
    let bookings = Arc::new(UnavailableBookingRepository::default());
    let service = BookingService::new(
        Arc::clone(&bookings),
        Arc::clone(&passengers),
        Arc::clone(&activities),
        BookingServiceConfig::default(),
    );

    let passenger = passengers
        .create(Passenger::new("Traveller", "+61412345678", PassengerType::Standard, 50.0))
        .await
        .unwrap();
    let activity = activities
        .create(Activity::new("Zipline", "", 20.0, 2, DESTINATION))
        .await
        .unwrap();

    let result = service
        .create_booking(passenger.passenger_id, activity.activity_id, DESTINATION)
        .await;

    assert!(matches!(result, Err(DomainError::Database { .. })));
    assert_eq!(bookings.write_attempts.load(Ordering::SeqCst), 1);

    let stored = passengers.find_by_id(passenger.passenger_id).await.unwrap().unwrap();
    assert!(approx_eq(stored.balance, 50.0));
    let stored = activities.find_by_id(activity.activity_id).await.unwrap().unwrap();
    assert_eq!(stored.capacity, 2);
}
