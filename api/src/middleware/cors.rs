//! CORS middleware configuration for cross-origin requests.
//!
//! Development allows any origin. Other environments only allow the
//! origins listed in `ALLOWED_ORIGINS`; an empty list there means any origin.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use ta_shared::config::{CorsConfig, Environment};

/// Creates a CORS middleware instance for the given environment.
pub fn create_cors(config: &CorsConfig, environment: Environment) -> Cors {
    if environment.is_development() || config.allows_any_origin() {
        create_permissive_cors(config.max_age)
    } else {
        create_restricted_cors(config)
    }
}

fn allowed_methods() -> Vec<Method> {
    vec![
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ]
}

fn create_permissive_cors(max_age: usize) -> Cors {
    tracing::info!("Configuring permissive CORS");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::USER_AGENT,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(max_age)
}

fn create_restricted_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age);

    for origin in &config.allowed_origins {
        tracing::info!(origin = %origin, "Adding allowed origin");
        cors = cors.allowed_origin(origin);
    }

    cors
}
