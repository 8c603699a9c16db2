//! In-memory repositories.
//!
//! Used as test doubles and as the `memory` storage backend. Each entity type
//! lives in its own [`InMemoryTable`] guarded by a tokio `RwLock`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{
    ActivityRepository, BookingRepository, DestinationRepository, PassengerRepository, Repository,
    TravelPackageRepository,
};
use crate::domain::entities::{
    Activity, Booking, Destination, DestinationId, Entity, Passenger, PassengerId, TravelPackage,
};
use crate::errors::{DomainError, DomainResult};

/// A map of entities keyed by identifier with a monotonically increasing id counter
pub struct InMemoryTable<T> {
    rows: Arc<RwLock<HashMap<i64, T>>>,
    next_id: Arc<AtomicI64>,
}

pub type InMemoryDestinationRepository = InMemoryTable<Destination>;
pub type InMemoryActivityRepository = InMemoryTable<Activity>;
pub type InMemoryTravelPackageRepository = InMemoryTable<TravelPackage>;
pub type InMemoryPassengerRepository = InMemoryTable<Passenger>;
pub type InMemoryBookingRepository = InMemoryTable<Booking>;

impl<T: Entity> InMemoryTable<T> {
    /// Create an empty table; the first assigned id is 1
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Number of stored rows
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Rows matching the predicate, ordered by identifier
    async fn select<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool + Send,
    {
        let rows = self.rows.read().await;
        let mut selected: Vec<T> = rows.values().filter(|row| predicate(row)).cloned().collect();
        selected.sort_by_key(|row| row.id());
        selected
    }
}

impl<T: Entity> Default for InMemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for InMemoryTable<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

#[async_trait]
impl<T: Entity + 'static> Repository<T> for InMemoryTable<T> {
    async fn create(&self, mut item: T) -> DomainResult<T> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        item.set_id(id);

        let mut rows = self.rows.write().await;
        rows.insert(id, item.clone());
        Ok(item)
    }

    async fn update(&self, item: T) -> DomainResult<T> {
        let mut rows = self.rows.write().await;

        if !rows.contains_key(&item.id()) {
            return Err(DomainError::not_found::<T>(item.id()));
        }

        rows.insert(item.id(), item.clone());
        Ok(item)
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        let mut rows = self.rows.write().await;
        Ok(rows.remove(&id).is_some())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<T>> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }
}

#[async_trait]
impl DestinationRepository for InMemoryTable<Destination> {
    async fn find_all(&self) -> DomainResult<Vec<Destination>> {
        Ok(self.select(|_| true).await)
    }
}

#[async_trait]
impl ActivityRepository for InMemoryTable<Activity> {
    async fn find_by_destination(&self, destination_id: DestinationId) -> DomainResult<Vec<Activity>> {
        Ok(self
            .select(move |activity| activity.destination_id == destination_id)
            .await)
    }

    async fn find_with_available_space(&self) -> DomainResult<Vec<Activity>> {
        Ok(self.select(Activity::has_space).await)
    }
}

impl TravelPackageRepository for InMemoryTable<TravelPackage> {}

impl PassengerRepository for InMemoryTable<Passenger> {}

#[async_trait]
impl BookingRepository for InMemoryTable<Booking> {
    async fn find_by_passenger(&self, passenger_id: PassengerId) -> DomainResult<Vec<Booking>> {
        Ok(self
            .select(move |booking| booking.passenger_id == passenger_id)
            .await)
    }
}
