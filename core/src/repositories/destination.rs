//! Destination repository trait.

use async_trait::async_trait;

use super::Repository;
use crate::domain::entities::Destination;
use crate::errors::DomainResult;

/// Persistence for destinations.
///
/// Stored destinations do not carry their activities; those are looked up
/// through [`super::ActivityRepository::find_by_destination`].
#[async_trait]
pub trait DestinationRepository: Repository<Destination> {
    /// All destinations ordered by identifier
    async fn find_all(&self) -> DomainResult<Vec<Destination>>;
}
