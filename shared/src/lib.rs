//! Shared utilities and common types for the travel agency server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error types and response structures
//! - Utility functions (phone and amount validation)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, BookingConfig, CorsConfig, DatabaseConfig, Environment, LogFormat, LoggingConfig,
    ServerConfig, StorageBackend,
};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
pub use types::{ApiResponse, HealthResponse, HealthStatus, ServiceHealth};
pub use utils::{phone, validation};
