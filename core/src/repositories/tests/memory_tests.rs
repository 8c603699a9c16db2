//! Unit tests for the in-memory repositories

use crate::domain::entities::{Activity, Booking, BookingStatus, Destination, Passenger, PassengerType};
use crate::errors::DomainError;
use crate::repositories::{
    ActivityRepository, BookingRepository, DestinationRepository, InMemoryActivityRepository,
    InMemoryBookingRepository, InMemoryDestinationRepository, InMemoryPassengerRepository,
    Repository,
};

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let repo = InMemoryDestinationRepository::new();

    let first = repo.create(Destination::new("Kyoto")).await.unwrap();
    let second = repo.create(Destination::new("Lisbon")).await.unwrap();

    assert_eq!(first.destination_id, 1);
    assert_eq!(second.destination_id, 2);
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn test_find_by_id_returns_stored_copy() {
    let repo = InMemoryPassengerRepository::new();
    let created = repo
        .create(Passenger::new("Ada", "+61412345678", PassengerType::Gold, 120.0))
        .await
        .unwrap();

    let found = repo.find_by_id(created.passenger_id).await.unwrap();
    assert_eq!(found, Some(created));

    let missing = repo.find_by_id(99).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_update_missing_entity_is_not_found() {
    let repo = InMemoryActivityRepository::new();
    let mut ghost = Activity::new("Ghost tour", "", 10.0, 5, 1);
    ghost.activity_id = 42;

    let result = repo.update(ghost).await;
    match result {
        Err(DomainError::NotFound { resource, id }) => {
            assert_eq!(resource, "Activity");
            assert_eq!(id, 42);
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_replaces_row() {
    let repo = InMemoryActivityRepository::new();
    let mut activity = repo
        .create(Activity::new("Kayaking", "Bay tour", 45.0, 8, 1))
        .await
        .unwrap();

    activity.capacity = 3;
    repo.update(activity.clone()).await.unwrap();

    let stored = repo.find_by_id(activity.activity_id).await.unwrap().unwrap();
    assert_eq!(stored.capacity, 3);
}

#[tokio::test]
async fn test_delete_reports_whether_row_existed() {
    let repo = InMemoryDestinationRepository::new();
    let created = repo.create(Destination::new("Oslo")).await.unwrap();

    assert!(repo.delete(created.destination_id).await.unwrap());
    assert!(!repo.delete(created.destination_id).await.unwrap());
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_find_all_is_ordered_by_id() {
    let repo = InMemoryDestinationRepository::new();
    for name in ["Cairo", "Bergen", "Austin"] {
        repo.create(Destination::new(name)).await.unwrap();
    }

    let names: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["Cairo", "Bergen", "Austin"]);
}

#[tokio::test]
async fn test_activity_queries() {
    let repo = InMemoryActivityRepository::new();
    repo.create(Activity::new("Snorkel", "", 30.0, 4, 1)).await.unwrap();
    repo.create(Activity::new("Dive", "", 90.0, 0, 1)).await.unwrap();
    repo.create(Activity::new("Museum", "", 15.0, 20, 2)).await.unwrap();

    let at_first = repo.find_by_destination(1).await.unwrap();
    assert_eq!(at_first.len(), 2);
    assert!(at_first.iter().all(|a| a.destination_id == 1));

    let available = repo.find_with_available_space().await.unwrap();
    let names: Vec<&str> = available.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Snorkel", "Museum"]);
}

#[tokio::test]
async fn test_bookings_by_passenger() {
    let repo = InMemoryBookingRepository::new();
    repo.create(Booking::new(1, 1, 1)).await.unwrap();
    let mut cancelled = repo.create(Booking::new(1, 1, 2)).await.unwrap();
    repo.create(Booking::new(2, 1, 1)).await.unwrap();

    cancelled.status = BookingStatus::Cancelled;
    repo.update(cancelled).await.unwrap();

    let bookings = repo.find_by_passenger(1).await.unwrap();
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[1].status, BookingStatus::Cancelled);
}

#[tokio::test]
async fn test_clones_share_rows() {
    let repo = InMemoryDestinationRepository::new();
    let handle = repo.clone();

    handle.create(Destination::new("Quito")).await.unwrap();
    assert_eq!(repo.len().await, 1);
}
