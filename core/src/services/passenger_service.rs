//! Passenger management

use std::sync::Arc;

use ta_shared::phone::{is_valid_mobile, mask_phone_number, normalize_phone_number};
use ta_shared::validation::is_valid_amount;

use crate::domain::entities::{Passenger, PassengerId, PassengerType};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::PassengerRepository;

pub struct PassengerService<P: PassengerRepository> {
    passengers: Arc<P>,
}

impl<P: PassengerRepository> PassengerService<P> {
    pub fn new(passengers: Arc<P>) -> Self {
        Self { passengers }
    }

    /// Register a passenger with an opening balance
    ///
    /// The mobile number is stored normalized (formatting characters removed).
    pub async fn create_passenger(
        &self,
        name: &str,
        mobile: &str,
        passenger_type: PassengerType,
        balance: f64,
    ) -> DomainResult<Passenger> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Passenger name must not be empty"));
        }
        if !is_valid_mobile(mobile) {
            return Err(DomainError::validation(format!(
                "Invalid mobile number: {}",
                mask_phone_number(mobile)
            )));
        }
        validate_balance(balance)?;

        let passenger = self
            .passengers
            .create(Passenger::new(
                name,
                normalize_phone_number(mobile),
                passenger_type,
                balance,
            ))
            .await?;

        tracing::info!(
            passenger_id = passenger.passenger_id,
            passenger_type = %passenger.passenger_type,
            mobile = %mask_phone_number(&passenger.mobile),
            event = "passenger_created",
            "Passenger created"
        );

        Ok(passenger)
    }

    /// Set the passenger's balance
    pub async fn update_passenger_balance(
        &self,
        id: PassengerId,
        new_balance: f64,
    ) -> DomainResult<Passenger> {
        validate_balance(new_balance)?;

        let mut passenger = self.get_passenger_details(id).await?;
        passenger.balance = new_balance;
        let updated = self.passengers.update(passenger).await?;

        tracing::info!(
            passenger_id = id,
            balance = new_balance,
            event = "passenger_balance_updated",
            "Passenger balance updated"
        );

        Ok(updated)
    }

    /// Load a passenger with their active bookings
    pub async fn get_passenger_details(&self, id: PassengerId) -> DomainResult<Passenger> {
        self.passengers
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found::<Passenger>(id))
    }
}

fn validate_balance(balance: f64) -> DomainResult<()> {
    if !is_valid_amount(balance) {
        return Err(DomainError::validation(format!(
            "Balance must be a non-negative amount, got {}",
            balance
        )));
    }
    Ok(())
}
