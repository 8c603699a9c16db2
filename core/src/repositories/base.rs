//! Generic repository contract shared by every entity.
//!
//! Implementations assign identifiers on `create`; callers never supply them.
//! Every method is async and returns a [`DomainResult`] so that storage
//! failures surface as [`crate::errors::DomainError::Database`].

use async_trait::async_trait;

use crate::domain::entities::Entity;
use crate::errors::DomainResult;

/// Basic persistence operations for an entity type
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use ta_core::domain::entities::Destination;
/// use ta_core::errors::DomainResult;
/// use ta_core::repositories::Repository;
///
/// struct FileDestinationRepository;
///
/// #[async_trait]
/// impl Repository<Destination> for FileDestinationRepository {
///     async fn create(&self, item: Destination) -> DomainResult<Destination> {
///         Ok(item)
///     }
///
///     // ... other methods
/// #   async fn update(&self, item: Destination) -> DomainResult<Destination> { Ok(item) }
/// #   async fn delete(&self, _id: i64) -> DomainResult<bool> { Ok(false) }
/// #   async fn find_by_id(&self, _id: i64) -> DomainResult<Option<Destination>> { Ok(None) }
/// }
/// ```
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Persists a new entity and returns it with its assigned identifier
    async fn create(&self, item: T) -> DomainResult<T>;

    /// Replaces a stored entity
    ///
    /// # Returns
    /// * `Ok(T)` - The entity as stored
    /// * `Err(DomainError::NotFound)` - No entity with this identifier
    async fn update(&self, item: T) -> DomainResult<T>;

    /// Removes an entity. Returns true if something was removed.
    async fn delete(&self, id: i64) -> DomainResult<bool>;

    /// Looks up an entity by identifier
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<T>>;
}
