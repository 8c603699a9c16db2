//! MySQL storage backend

use async_trait::async_trait;
use std::sync::Arc;

use ta_core::errors::{DomainError, DomainResult};
use ta_core::repositories::Storage;

use crate::database::connection::DatabasePool;

use super::{
    MySqlActivityRepository, MySqlBookingRepository, MySqlDestinationRepository,
    MySqlPassengerRepository, MySqlTravelPackageRepository,
};

/// All repositories over one shared connection pool
#[derive(Clone)]
pub struct MySqlStorage {
    pool: DatabasePool,
    activities: Arc<MySqlActivityRepository>,
    bookings: Arc<MySqlBookingRepository>,
    destinations: Arc<MySqlDestinationRepository>,
    passengers: Arc<MySqlPassengerRepository>,
    packages: Arc<MySqlTravelPackageRepository>,
}

impl MySqlStorage {
    pub fn new(pool: DatabasePool) -> Self {
        let sql = pool.get_pool().clone();
        Self {
            activities: Arc::new(MySqlActivityRepository::new(sql.clone())),
            bookings: Arc::new(MySqlBookingRepository::new(sql.clone())),
            destinations: Arc::new(MySqlDestinationRepository::new(sql.clone())),
            passengers: Arc::new(MySqlPassengerRepository::new(sql.clone())),
            packages: Arc::new(MySqlTravelPackageRepository::new(sql)),
            pool,
        }
    }

    /// The pool shared by every repository
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }
}

#[async_trait]
impl Storage for MySqlStorage {
    type Activities = MySqlActivityRepository;
    type Bookings = MySqlBookingRepository;
    type Destinations = MySqlDestinationRepository;
    type Passengers = MySqlPassengerRepository;
    type Packages = MySqlTravelPackageRepository;

    fn activities(&self) -> Arc<Self::Activities> {
        Arc::clone(&self.activities)
    }

    fn bookings(&self) -> Arc<Self::Bookings> {
        Arc::clone(&self.bookings)
    }

    fn destinations(&self) -> Arc<Self::Destinations> {
        Arc::clone(&self.destinations)
    }

    fn passengers(&self) -> Arc<Self::Passengers> {
        Arc::clone(&self.passengers)
    }

    fn packages(&self) -> Arc<Self::Packages> {
        Arc::clone(&self.packages)
    }

    fn backend_name(&self) -> &'static str {
        "mysql"
    }

    async fn health_check(&self) -> DomainResult<()> {
        if self.pool.health_check().await? {
            tracing::debug!(stats = %self.pool.get_statistics(), "MySQL storage healthy");
            Ok(())
        } else {
            Err(DomainError::database("Unexpected health check result"))
        }
    }
}
