//! Passenger repository trait.

use super::Repository;
use crate::domain::entities::Passenger;

/// Persistence for passengers.
///
/// Implementations persist the passenger's active bookings along with the
/// passenger and return them from `find_by_id`.
pub trait PassengerRepository: Repository<Passenger> {}
