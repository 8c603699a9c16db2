//! Main booking service implementation

use std::sync::Arc;

use crate::domain::entities::{
    Activity, ActivityId, Booking, BookingId, BookingStatus, DestinationId, Passenger, PassengerId,
};
use crate::errors::{BookingError, DomainError, DomainResult};
use crate::repositories::{ActivityRepository, BookingRepository, PassengerRepository};

use super::config::BookingServiceConfig;
use super::pricing::{discounted_cost, refund_amount};

/// Books activities for passengers and handles cancellations
///
/// Booking moves money and places between three repositories: the passenger
/// pays the tier price and the activity loses one place. Cancelling reverses
/// both. The writes are sequential and not covered by a shared transaction.
pub struct BookingService<B, P, A>
where
    B: BookingRepository,
    P: PassengerRepository,
    A: ActivityRepository,
{
    bookings: Arc<B>,
    passengers: Arc<P>,
    activities: Arc<A>,
    config: BookingServiceConfig,
}

impl<B, P, A> BookingService<B, P, A>
where
    B: BookingRepository,
    P: PassengerRepository,
    A: ActivityRepository,
{
    /// Create a new booking service
    ///
    /// # Arguments
    ///
    /// * `bookings` - Booking repository
    /// * `passengers` - Passenger repository, debited and credited
    /// * `activities` - Activity repository, whose capacity is consumed
    /// * `config` - Pricing configuration
    pub fn new(
        bookings: Arc<B>,
        passengers: Arc<P>,
        activities: Arc<A>,
        config: BookingServiceConfig,
    ) -> Self {
        Self {
            bookings,
            passengers,
            activities,
            config,
        }
    }

    /// Book one place on an activity for a passenger
    ///
    /// This method:
    /// 1. Loads the passenger and the activity
    /// 2. Checks the activity is offered at `destination_id`
    /// 3. Checks a place is left and the passenger can pay the tier price
    /// 4. Stores a `PENDING` booking
    /// 5. Debits the passenger and records the booking on them
    /// 6. Takes one place from the activity
    ///
    /// Nothing is written when a check fails.
    ///
    /// # Returns
    ///
    /// * `Ok(Booking)` - The stored booking with its identifier
    /// * `Err(DomainError::NotFound)` - Unknown passenger or activity
    /// * `Err(DomainError::Booking)` - No capacity or insufficient balance
    pub async fn create_booking(
        &self,
        passenger_id: PassengerId,
        activity_id: ActivityId,
        destination_id: DestinationId,
    ) -> DomainResult<Booking> {
        let mut passenger = self.load_passenger(passenger_id).await?;
        let mut activity = self.load_activity(activity_id).await?;

        if activity.destination_id != destination_id {
            return Err(DomainError::validation(format!(
                "Activity {} is not offered at destination {}",
                activity_id, destination_id
            )));
        }

        if !activity.has_space() {
            tracing::warn!(
                passenger_id,
                activity_id,
                event = "booking_rejected_capacity",
                "Booking rejected, activity is full"
            );
            return Err(BookingError::CapacityFull { activity_id }.into());
        }

        let price = discounted_cost(passenger.passenger_type, activity.cost, &self.config);
        if !passenger.can_afford(price) {
            tracing::warn!(
                passenger_id,
                activity_id,
                price,
                balance = passenger.balance,
                event = "booking_rejected_balance",
                "Booking rejected, insufficient balance"
            );
            return Err(BookingError::InsufficientBalance {
                activity_id,
                required: price,
                available: passenger.balance,
            }
            .into());
        }

        let booking = self
            .bookings
            .create(Booking::new(passenger_id, destination_id, activity_id))
            .await?;

        passenger.record_booking(booking.clone(), price);
        self.passengers.update(passenger).await?;

        activity.reserve_place();
        self.activities.update(activity).await?;

        tracing::info!(
            booking_id = booking.booking_id,
            passenger_id,
            activity_id,
            price,
            event = "booking_created",
            "Booking created"
        );

        Ok(booking)
    }

    /// Change a booking's status
    ///
    /// Moving to `CANCELLED` refunds the passenger their tier's price at the
    /// activity's current cost, drops the booking from their list and gives
    /// the place back to the activity. Other transitions update the booking
    /// and the passenger's copy of it. A cancelled booking can no longer
    /// change.
    pub async fn update_booking_status(
        &self,
        id: BookingId,
        new_status: BookingStatus,
    ) -> DomainResult<Booking> {
        let mut booking = self.get_booking_details(id).await?;

        if booking.status.is_cancelled() {
            return Err(BookingError::AlreadyCancelled { booking_id: id }.into());
        }

        if !new_status.is_cancelled() {
            let mut passenger = self.load_passenger(booking.passenger_id).await?;

            let previous = booking.status;
            booking.status = new_status;
            let updated = self.bookings.update(booking).await?;

            // Keep the passenger's copy of the booking in step
            if passenger.sync_booking(&updated) {
                self.passengers.update(passenger).await?;
            }

            tracing::info!(
                booking_id = id,
                from = %previous,
                to = %new_status,
                event = "booking_status_changed",
                "Booking status changed"
            );

            return Ok(updated);
        }

        let mut passenger = self.load_passenger(booking.passenger_id).await?;
        let mut activity = self.load_activity(booking.activity_id).await?;

        if !activity.release_place() {
            return Err(DomainError::BusinessRule {
                message: format!(
                    "Activity {} cannot take back a place, capacity is at its maximum",
                    activity.activity_id
                ),
            });
        }

        booking.status = BookingStatus::Cancelled;
        let updated = self.bookings.update(booking).await?;

        // Refund follows the current activity cost
        let refund = refund_amount(passenger.passenger_type, activity.cost, &self.config);
        passenger.release_booking(id, refund);
        self.passengers.update(passenger).await?;

        self.activities.update(activity).await?;

        tracing::info!(
            booking_id = id,
            passenger_id = updated.passenger_id,
            activity_id = updated.activity_id,
            refund,
            event = "booking_cancelled",
            "Booking cancelled"
        );

        Ok(updated)
    }

    pub async fn get_booking_details(&self, id: BookingId) -> DomainResult<Booking> {
        self.bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found::<Booking>(id))
    }

    /// Booking history of a passenger, cancelled bookings included
    pub async fn passenger_bookings(&self, passenger_id: PassengerId) -> DomainResult<Vec<Booking>> {
        self.load_passenger(passenger_id).await?;
        self.bookings.find_by_passenger(passenger_id).await
    }

    async fn load_passenger(&self, id: PassengerId) -> DomainResult<Passenger> {
        self.passengers
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found::<Passenger>(id))
    }

    async fn load_activity(&self, id: ActivityId) -> DomainResult<Activity> {
        self.activities
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found::<Activity>(id))
    }
}
