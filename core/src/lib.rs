//! # Travel Agency Core
//!
//! Core business logic and domain layer for the travel agency backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types. Storage backends plug in through [`repositories::Storage`].

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
