use std::collections::HashMap;

use actix_web::{web, HttpResponse};

use ta_core::repositories::Storage;
use ta_shared::{HealthResponse, HealthStatus, ServiceHealth};

use crate::app::AppState;

/// Handler for GET /health
///
/// Reports the storage backend; 503 when it cannot be reached.
pub async fn health_check<S: Storage>(state: web::Data<AppState<S>>) -> HttpResponse {
    let storage = state.services.storage();

    let storage_health = match storage.health_check().await {
        Ok(()) => ServiceHealth::healthy(),
        Err(error) => {
            tracing::error!(error = %error, backend = storage.backend_name(), "Storage health check failed");
            ServiceHealth::unhealthy(error.to_string())
        }
    };

    let mut services = HashMap::new();
    services.insert(storage.backend_name().to_string(), storage_health);
    let health = HealthResponse::from_services(services, env!("CARGO_PKG_VERSION"));

    match health.status {
        HealthStatus::Unhealthy => HttpResponse::ServiceUnavailable().json(health),
        _ => HttpResponse::Ok().json(health),
    }
}
