//! # Infrastructure Layer
//!
//! MySQL persistence for the travel agency backend. It provides the
//! connection pool, the bundled schema and a [`database::MySqlStorage`] that
//! plugs into the core services through `ta_core::repositories::Storage`.

use ta_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{DatabasePool, MySqlStorage, PoolStatistics};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Database(e) => DomainError::database(e),
            InfrastructureError::Config(message) => DomainError::Internal { message },
        }
    }
}
