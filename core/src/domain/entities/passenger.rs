//! Passenger entity representing a customer of the agency.

use serde::{Deserialize, Serialize};

use super::{Booking, BookingId, Entity, UNASSIGNED_ID};

pub type PassengerId = i64;

/// Membership tier; determines booking price and refund
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassengerType {
    /// Pays full price
    Standard,
    /// Pays a discounted price
    Gold,
    /// Books for free
    Premium,
}

impl PassengerType {
    /// Persisted representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PassengerType::Standard => "STANDARD",
            PassengerType::Gold => "GOLD",
            PassengerType::Premium => "PREMIUM",
        }
    }
}

impl std::fmt::Display for PassengerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PassengerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "STANDARD" => Ok(PassengerType::Standard),
            "GOLD" => Ok(PassengerType::Gold),
            "PREMIUM" => Ok(PassengerType::Premium),
            _ => Err(format!("Invalid passenger type: {}", s)),
        }
    }
}

/// A passenger with a prepaid balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    /// Unique identifier, assigned on creation
    pub passenger_id: PassengerId,

    /// Full name
    pub name: String,

    /// Mobile phone number
    pub mobile: String,

    /// Membership tier
    pub passenger_type: PassengerType,

    /// Prepaid balance available for bookings
    pub balance: f64,

    /// Active (non-cancelled) bookings
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl Passenger {
    /// Creates a passenger that has not been persisted yet
    pub fn new(
        name: impl Into<String>,
        mobile: impl Into<String>,
        passenger_type: PassengerType,
        balance: f64,
    ) -> Self {
        Self {
            passenger_id: UNASSIGNED_ID,
            name: name.into(),
            mobile: mobile.into(),
            passenger_type,
            balance,
            bookings: Vec::new(),
        }
    }

    /// Whether the balance covers the given amount
    pub fn can_afford(&self, amount: f64) -> bool {
        self.balance >= amount
    }

    /// Debits the balance and records the booking
    pub fn record_booking(&mut self, booking: Booking, price: f64) {
        self.balance -= price;
        self.bookings.push(booking);
    }

    /// Replaces the stored copy of `booking`. Returns true when the copy
    /// held by the passenger changed.
    pub fn sync_booking(&mut self, booking: &Booking) -> bool {
        match self.bookings.iter_mut().find(|b| b.booking_id == booking.booking_id) {
            Some(held) if *held != *booking => {
                *held = booking.clone();
                true
            }
            _ => false,
        }
    }

    /// Credits the refund and forgets the booking
    pub fn release_booking(&mut self, booking_id: BookingId, refund: f64) {
        self.balance += refund;
        self.bookings.retain(|b| b.booking_id != booking_id);
    }
}

impl Entity for Passenger {
    const RESOURCE: &'static str = "Passenger";

    fn id(&self) -> i64 {
        self.passenger_id
    }

    fn set_id(&mut self, id: i64) {
        self.passenger_id = id;
    }
}
