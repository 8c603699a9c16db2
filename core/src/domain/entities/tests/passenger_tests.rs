//! Unit tests for passenger entity

use crate::domain::entities::{Booking, BookingStatus, Passenger, PassengerType};

fn booking_with_id(id: i64) -> Booking {
    let mut booking = Booking::new(1, 2, 3);
    booking.booking_id = id;
    booking
}

#[test]
fn test_new_passenger() {
    let passenger = Passenger::new("Ada", "+61412345678", PassengerType::Gold, 300.0);

    assert_eq!(passenger.name, "Ada");
    assert_eq!(passenger.passenger_type, PassengerType::Gold);
    assert!(passenger.bookings.is_empty());
    assert!(passenger.can_afford(300.0));
    assert!(!passenger.can_afford(300.01));
}

#[test]
fn test_record_and_release_booking() {
    let mut passenger = Passenger::new("Ada", "+61412345678", PassengerType::Standard, 500.0);

    passenger.record_booking(booking_with_id(7), 100.0);
    passenger.record_booking(booking_with_id(8), 50.0);
    assert_eq!(passenger.balance, 350.0);
    assert_eq!(passenger.bookings.len(), 2);

    passenger.release_booking(7, 100.0);
    assert_eq!(passenger.balance, 450.0);
    assert_eq!(passenger.bookings.len(), 1);
    assert_eq!(passenger.bookings[0].booking_id, 8);
}

#[test]
fn test_sync_booking_replaces_held_copy() {
    let mut passenger = Passenger::new("Ada", "+61412345678", PassengerType::Standard, 500.0);
    passenger.record_booking(booking_with_id(7), 100.0);

    let mut confirmed = booking_with_id(7);
    confirmed.status = BookingStatus::Confirmed;
    assert!(passenger.sync_booking(&confirmed));
    assert_eq!(passenger.bookings[0].status, BookingStatus::Confirmed);

    // Unchanged or unknown bookings are left alone
    assert!(!passenger.sync_booking(&confirmed));
    assert!(!passenger.sync_booking(&booking_with_id(9)));
    assert_eq!(passenger.bookings.len(), 1);
}

#[test]
fn test_passenger_type_serialization() {
    let json = serde_json::to_string(&PassengerType::Premium).unwrap();
    assert_eq!(json, "\"PREMIUM\"");
    assert_eq!("gold".parse::<PassengerType>().unwrap(), PassengerType::Gold);
    assert!("platinum".parse::<PassengerType>().is_err());
}
