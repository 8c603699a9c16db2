//! Unit tests for activity entity

use crate::domain::entities::{Activity, Entity, UNASSIGNED_ID};

#[test]
fn test_new_activity_is_unassigned() {
    let activity = Activity::new("Tea ceremony", "Traditional matcha", 45.0, 8, 3);

    assert_eq!(activity.activity_id, UNASSIGNED_ID);
    assert_eq!(activity.destination_id, 3);
    assert_eq!(activity.capacity, 8);
    assert!(activity.has_space());
}

#[test]
fn test_reserve_and_release_place() {
    let mut activity = Activity::new("Kayak", "Harbour tour", 60.0, 1, 1);

    assert!(activity.reserve_place());
    assert_eq!(activity.capacity, 0);
    assert!(!activity.has_space());

    // Full: nothing changes
    assert!(!activity.reserve_place());
    assert_eq!(activity.capacity, 0);

    assert!(activity.release_place());
    assert_eq!(activity.capacity, 1);
}

#[test]
fn test_release_place_at_max_capacity() {
    let mut activity = Activity::new("Kayak", "Harbour tour", 60.0, i32::MAX, 1);

    assert!(!activity.release_place());
    assert_eq!(activity.capacity, i32::MAX);
}

#[test]
fn test_entity_id_roundtrip() {
    let mut activity = Activity::new("Dive", "Reef dive", 150.0, 4, 2);
    activity.set_id(42);
    assert_eq!(activity.id(), 42);
    assert_eq!(Activity::RESOURCE, "Activity");
}
