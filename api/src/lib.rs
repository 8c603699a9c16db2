//! HTTP surface of the travel agency backend
//!
//! - `app` - Application state and the Actix-web factory
//! - `dto` - Request bodies with their validation rules
//! - `handlers` - Error to response mapping
//! - `middleware` - CORS
//! - `routes` - Endpoint handlers and the route table

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
