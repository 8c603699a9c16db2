//! Destination management

use std::sync::Arc;

use crate::domain::entities::{Destination, DestinationId};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ActivityRepository, DestinationRepository};

/// Creates, renames and looks up destinations
pub struct DestinationService<D: DestinationRepository, A: ActivityRepository> {
    destinations: Arc<D>,
    activities: Arc<A>,
}

impl<D: DestinationRepository, A: ActivityRepository> DestinationService<D, A> {
    pub fn new(destinations: Arc<D>, activities: Arc<A>) -> Self {
        Self {
            destinations,
            activities,
        }
    }

    /// Create a destination with no activities
    pub async fn create_destination(&self, name: &str) -> DomainResult<Destination> {
        let name = validate_name(name)?;
        let destination = self.destinations.create(Destination::new(name)).await?;

        tracing::info!(
            destination_id = destination.destination_id,
            event = "destination_created",
            "Destination created"
        );

        Ok(destination)
    }

    /// Load a destination together with the activities it offers
    pub async fn get_destination_details(&self, id: DestinationId) -> DomainResult<Destination> {
        let mut destination = self.load(id).await?;
        destination.activities = self.activities.find_by_destination(id).await?;
        Ok(destination)
    }

    pub async fn update_destination_name(
        &self,
        id: DestinationId,
        new_name: &str,
    ) -> DomainResult<Destination> {
        let new_name = validate_name(new_name)?;
        let mut destination = self.load(id).await?;
        destination.rename(new_name);

        let mut updated = self.destinations.update(destination).await?;
        updated.activities = self.activities.find_by_destination(id).await?;

        tracing::info!(
            destination_id = id,
            event = "destination_renamed",
            "Destination renamed"
        );

        Ok(updated)
    }

    /// All destinations, without their activities
    pub async fn list_destinations(&self) -> DomainResult<Vec<Destination>> {
        self.destinations.find_all().await
    }

    async fn load(&self, id: DestinationId) -> DomainResult<Destination> {
        self.destinations
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found::<Destination>(id))
    }
}

fn validate_name(name: &str) -> DomainResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("Destination name must not be empty"));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Activity;
    use crate::repositories::{
        InMemoryActivityRepository, InMemoryDestinationRepository, Repository,
    };

    fn service() -> (
        DestinationService<InMemoryDestinationRepository, InMemoryActivityRepository>,
        Arc<InMemoryActivityRepository>,
    ) {
        let activities = Arc::new(InMemoryActivityRepository::new());
        let service = DestinationService::new(
            Arc::new(InMemoryDestinationRepository::new()),
            Arc::clone(&activities),
        );
        (service, activities)
    }

    #[tokio::test]
    async fn test_create_destination() {
        let (service, _) = service();

        let destination = service.create_destination("  Reykjavik ").await.unwrap();
        assert_eq!(destination.name, "Reykjavik");
        assert!(destination.destination_id > 0);
        assert!(destination.activities.is_empty());
    }

    #[tokio::test]
    async fn test_create_destination_rejects_blank_name() {
        let (service, _) = service();

        let result = service.create_destination("   ").await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert!(service.list_destinations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_details_include_activities() {
        let (service, activities) = service();
        let destination = service.create_destination("Cusco").await.unwrap();
        activities
            .create(Activity::new("Machu Picchu trek", "", 250.0, 12, destination.destination_id))
            .await
            .unwrap();
        activities
            .create(Activity::new("Other place", "", 10.0, 1, destination.destination_id + 1))
            .await
            .unwrap();

        let details = service
            .get_destination_details(destination.destination_id)
            .await
            .unwrap();
        assert_eq!(details.activities.len(), 1);
        assert_eq!(details.activities[0].name, "Machu Picchu trek");
    }

    #[tokio::test]
    async fn test_unknown_destination_is_not_found() {
        let (service, _) = service();

        let result = service.get_destination_details(7).await;
        assert!(matches!(result, Err(DomainError::NotFound { id: 7, .. })));

        let result = service.update_destination_name(7, "Anywhere").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_destination_name() {
        let (service, _) = service();
        let destination = service.create_destination("Bombay").await.unwrap();

        let renamed = service
            .update_destination_name(destination.destination_id, "Mumbai")
            .await
            .unwrap();
        assert_eq!(renamed.name, "Mumbai");

        let listed = service.list_destinations().await.unwrap();
        assert_eq!(listed[0].name, "Mumbai");
    }
}
