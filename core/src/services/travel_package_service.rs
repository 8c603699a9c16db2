//! Travel package management

use std::sync::Arc;

use crate::domain::entities::{Destination, DestinationId, PackageId, TravelPackage};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ActivityRepository, DestinationRepository, TravelPackageRepository};

/// Manages travel packages and their itineraries
pub struct TravelPackageService<P, D, A>
where
    P: TravelPackageRepository,
    D: DestinationRepository,
    A: ActivityRepository,
{
    packages: Arc<P>,
    destinations: Arc<D>,
    activities: Arc<A>,
}

impl<P, D, A> TravelPackageService<P, D, A>
where
    P: TravelPackageRepository,
    D: DestinationRepository,
    A: ActivityRepository,
{
    pub fn new(packages: Arc<P>, destinations: Arc<D>, activities: Arc<A>) -> Self {
        Self {
            packages,
            destinations,
            activities,
        }
    }

    /// Create a package with an empty itinerary
    pub async fn create_travel_package(
        &self,
        name: &str,
        description: &str,
        passenger_capacity: i32,
    ) -> DomainResult<TravelPackage> {
        let name = validate_name(name)?;
        validate_capacity(passenger_capacity)?;

        let package = self
            .packages
            .create(TravelPackage::new(name, description, passenger_capacity))
            .await?;

        tracing::info!(
            package_id = package.package_id,
            capacity = passenger_capacity,
            event = "travel_package_created",
            "Travel package created"
        );

        Ok(package)
    }

    /// Load a package with its destinations and their activities
    pub async fn get_travel_package_details(&self, id: PackageId) -> DomainResult<TravelPackage> {
        self.packages
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found::<TravelPackage>(id))
    }

    pub async fn update_travel_package_name(
        &self,
        id: PackageId,
        new_name: &str,
    ) -> DomainResult<TravelPackage> {
        let new_name = validate_name(new_name)?;

        let mut package = self.get_travel_package_details(id).await?;
        package.name = new_name.to_string();
        self.packages.update(package).await
    }

    pub async fn update_travel_package_passenger_capacity(
        &self,
        id: PackageId,
        new_capacity: i32,
    ) -> DomainResult<TravelPackage> {
        validate_capacity(new_capacity)?;

        let mut package = self.get_travel_package_details(id).await?;
        package.capacity = new_capacity;
        let updated = self.packages.update(package).await?;

        tracing::info!(
            package_id = id,
            capacity = new_capacity,
            event = "travel_package_capacity_updated",
            "Travel package capacity updated"
        );

        Ok(updated)
    }

    /// Append a destination (with its activities) to the itinerary.
    ///
    /// Adding a destination that is already on the itinerary changes nothing
    /// and returns the package as stored.
    pub async fn add_destination_to_package(
        &self,
        package_id: PackageId,
        destination_id: DestinationId,
    ) -> DomainResult<TravelPackage> {
        let mut package = self.get_travel_package_details(package_id).await?;

        let mut destination = self
            .destinations
            .find_by_id(destination_id)
            .await?
            .ok_or_else(|| DomainError::not_found::<Destination>(destination_id))?;

        if package.includes_destination(destination_id) {
            tracing::debug!(
                package_id,
                destination_id,
                event = "travel_package_destination_exists",
                "Destination already on itinerary"
            );
            return Ok(package);
        }

        destination.activities = self.activities.find_by_destination(destination_id).await?;
        package.add_destination(destination);
        let updated = self.packages.update(package).await?;

        tracing::info!(
            package_id,
            destination_id,
            event = "travel_package_destination_added",
            "Destination added to travel package"
        );

        Ok(updated)
    }
}

fn validate_name(name: &str) -> DomainResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("Travel package name must not be empty"));
    }
    Ok(trimmed)
}

fn validate_capacity(capacity: i32) -> DomainResult<()> {
    if capacity < 0 {
        return Err(DomainError::validation(format!(
            "Passenger capacity must not be negative, got {}",
            capacity
        )));
    }
    Ok(())
}
