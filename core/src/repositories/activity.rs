//! Activity repository trait.

use async_trait::async_trait;

use super::Repository;
use crate::domain::entities::{Activity, DestinationId};
use crate::errors::DomainResult;

#[async_trait]
pub trait ActivityRepository: Repository<Activity> {
    /// Activities offered at a destination, ordered by identifier
    async fn find_by_destination(&self, destination_id: DestinationId) -> DomainResult<Vec<Activity>>;

    /// Activities with at least one remaining place
    async fn find_with_available_space(&self) -> DomainResult<Vec<Activity>>;
}
