//! Database module - MySQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management
//! - The bundled schema, applied idempotently on startup
//! - Repository implementations for every entity
//! - [`MySqlStorage`], grouping the repositories over one pool

pub mod connection;
pub mod mysql;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics, SCHEMA};
pub use mysql::{
    MySqlActivityRepository, MySqlBookingRepository, MySqlDestinationRepository,
    MySqlPassengerRepository, MySqlStorage, MySqlTravelPackageRepository,
};
