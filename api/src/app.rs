//! Application state and factory
//!
//! This module holds the shared application state and builds the Actix-web
//! application around it. The factory is also what the integration tests
//! drive through `actix_web::test`.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use ta_core::repositories::Storage;
use ta_core::services::ServiceRegistry;
use ta_shared::config::AppConfig;
use ta_shared::errors::{error_codes, ErrorResponse};

use crate::handlers::{json_error_handler, path_error_handler};
use crate::middleware::cors::create_cors;
use crate::routes;

/// Application state shared across workers
pub struct AppState<S: Storage> {
    pub services: ServiceRegistry<S>,
}

impl<S: Storage> AppState<S> {
    pub fn new(services: ServiceRegistry<S>) -> Self {
        Self { services }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<S: Storage>(
    app_state: web::Data<AppState<S>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);
    let path_config = web::PathConfig::default().error_handler(path_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .app_data(path_config)
        // Request spans first so CORS rejections are still traced
        .wrap(create_cors(&config.cors, config.environment))
        .wrap(TracingLogger::default())
        .configure(routes::configure::<S>)
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
