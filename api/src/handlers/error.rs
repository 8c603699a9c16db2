//! Conversion of domain and request errors into HTTP responses
//!
//! | error                                          | status |
//! |------------------------------------------------|--------|
//! | Validation, malformed body or path             | 400    |
//! | NotFound                                       | 404    |
//! | CapacityFull, InsufficientBalance, AlreadyCancelled, BusinessRule | 409 |
//! | Database, Internal                             | 500    |

use actix_web::error::{InternalError, JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use validator::ValidationErrors;

use ta_core::errors::DomainError;
use ta_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::BusinessRule { .. } | DomainError::Booking(_) => StatusCode::CONFLICT,
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = status_for(error);

    if status.is_server_error() {
        tracing::error!(error = %error, "Request failed");
    } else {
        tracing::warn!(error = %error, status = status.as_u16(), "Request rejected");
    }

    HttpResponse::build(status).json(error.to_error_response())
}

/// 400 response listing every failed field rule
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Request validation failed");

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        response = response.add_detail(field, messages);
    }

    tracing::warn!(errors = %errors, "Request validation failed");
    HttpResponse::BadRequest().json(response)
}

/// Malformed or oversized JSON bodies become a 400 `ErrorResponse`
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    tracing::warn!(error = %message, "Rejected JSON payload");

    let response = HttpResponse::BadRequest()
        .json(ErrorResponse::new(error_codes::BAD_REQUEST, message));
    InternalError::from_response(err, response).into()
}

/// Non-numeric identifiers in the path become a 400 `ErrorResponse`
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::BAD_REQUEST,
        format!("Invalid path parameter: {}", err),
    ));
    InternalError::from_response(err, response).into()
}
