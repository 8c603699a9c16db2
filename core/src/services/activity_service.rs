//! Activity management

use std::sync::Arc;

use crate::domain::entities::{Activity, ActivityId, Destination, DestinationId};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ActivityRepository, DestinationRepository};

/// Input for [`ActivityService::create_activity`]
#[derive(Debug, Clone)]
pub struct NewActivity {
    pub name: String,
    pub description: String,
    pub cost: f64,
    pub capacity: i32,
    pub destination_id: DestinationId,
}

pub struct ActivityService<A: ActivityRepository, D: DestinationRepository> {
    activities: Arc<A>,
    destinations: Arc<D>,
}

impl<A: ActivityRepository, D: DestinationRepository> ActivityService<A, D> {
    pub fn new(activities: Arc<A>, destinations: Arc<D>) -> Self {
        Self {
            activities,
            destinations,
        }
    }

    /// Create an activity at an existing destination
    pub async fn create_activity(&self, input: NewActivity) -> DomainResult<Activity> {
        if input.name.trim().is_empty() {
            return Err(DomainError::validation("Activity name must not be empty"));
        }
        validate_cost(input.cost)?;
        validate_capacity(input.capacity)?;

        if self.destinations.find_by_id(input.destination_id).await?.is_none() {
            return Err(DomainError::not_found::<Destination>(input.destination_id));
        }

        let activity = self
            .activities
            .create(Activity::new(
                input.name.trim(),
                input.description,
                input.cost,
                input.capacity,
                input.destination_id,
            ))
            .await?;

        tracing::info!(
            activity_id = activity.activity_id,
            destination_id = activity.destination_id,
            event = "activity_created",
            "Activity created"
        );

        Ok(activity)
    }

    pub async fn get_activity_details(&self, id: ActivityId) -> DomainResult<Activity> {
        self.activities
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found::<Activity>(id))
    }

    /// Set the number of remaining places
    pub async fn update_activity_capacity(
        &self,
        id: ActivityId,
        new_capacity: i32,
    ) -> DomainResult<Activity> {
        validate_capacity(new_capacity)?;

        let mut activity = self.get_activity_details(id).await?;
        activity.capacity = new_capacity;
        let updated = self.activities.update(activity).await?;

        tracing::info!(
            activity_id = id,
            capacity = new_capacity,
            event = "activity_capacity_updated",
            "Activity capacity updated"
        );

        Ok(updated)
    }

    pub async fn update_activity_cost(&self, id: ActivityId, new_cost: f64) -> DomainResult<Activity> {
        validate_cost(new_cost)?;

        let mut activity = self.get_activity_details(id).await?;
        activity.cost = new_cost;
        let updated = self.activities.update(activity).await?;

        tracing::info!(
            activity_id = id,
            cost = new_cost,
            event = "activity_cost_updated",
            "Activity cost updated"
        );

        Ok(updated)
    }

    /// Activities offered at a destination; empty for an unknown destination
    pub async fn activities_for_destination(
        &self,
        destination_id: DestinationId,
    ) -> DomainResult<Vec<Activity>> {
        self.activities.find_by_destination(destination_id).await
    }

    /// Activities that still have at least one place
    pub async fn available_activities(&self) -> DomainResult<Vec<Activity>> {
        self.activities.find_with_available_space().await
    }
}

fn validate_cost(cost: f64) -> DomainResult<()> {
    if !ta_shared::validation::is_valid_amount(cost) {
        return Err(DomainError::validation(format!(
            "Activity cost must be a non-negative amount, got {}",
            cost
        )));
    }
    Ok(())
}

fn validate_capacity(capacity: i32) -> DomainResult<()> {
    if capacity < 0 {
        return Err(DomainError::validation(format!(
            "Activity capacity must not be negative, got {}",
            capacity
        )));
    }
    Ok(())
}
