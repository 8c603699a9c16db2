//! Domain-specific error types and error handling.

mod types;


pub use types::BookingError;

use ta_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

use crate::domain::entities::Entity;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Business rule violation: {message}")]
    BusinessRule { message: String },

    #[error("{resource} {id} not found")]
    NotFound { resource: String, id: i64 },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Booking(#[from] BookingError),
}

impl DomainError {
    /// Builds a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    /// Builds a not-found error for the entity type `T`
    pub fn not_found<T: Entity>(id: i64) -> Self {
        DomainError::NotFound {
            resource: T::RESOURCE.to_string(),
            id,
        }
    }

    /// Builds a database error from any displayable driver error
    pub fn database(error: impl std::fmt::Display) -> Self {
        DomainError::Database {
            message: error.to_string(),
        }
    }

    /// Whether the error is a missing resource
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }

    /// Stable error code for API clients
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => error_codes::VALIDATION_ERROR,
            DomainError::BusinessRule { .. } => error_codes::BUSINESS_RULE_VIOLATION,
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Database { .. } => error_codes::DATABASE_ERROR,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Booking(booking) => booking.code(),
        }
    }
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            // Driver messages stay in the logs
            DomainError::Database { .. } | DomainError::Internal { .. } => {
                ErrorResponse::new(self.code(), "An internal error occurred")
            }
            DomainError::NotFound { resource, id } => ErrorResponse::new(self.code(), self.to_string())
                .add_detail("resource", resource)
                .add_detail("id", id),
            DomainError::Booking(BookingError::InsufficientBalance {
                required, available, ..
            }) => ErrorResponse::new(self.code(), self.to_string())
                .add_detail("required", required)
                .add_detail("available", available),
            _ => ErrorResponse::new(self.code(), self.to_string()),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
