//! Booking repository trait.

use async_trait::async_trait;

use super::Repository;
use crate::domain::entities::{Booking, PassengerId};
use crate::errors::DomainResult;

#[async_trait]
pub trait BookingRepository: Repository<Booking> {
    /// Every booking made by a passenger, cancelled ones included
    async fn find_by_passenger(&self, passenger_id: PassengerId) -> DomainResult<Vec<Booking>>;
}
