//! Booking endpoints

use actix_web::{web, HttpResponse};

use ta_core::domain::entities::BookingStatus;
use ta_core::errors::DomainError;
use ta_core::repositories::Storage;

use super::{respond, respond_created, validate_body};
use crate::app::AppState;
use crate::dto::{CreateBookingRequest, UpdateBookingStatusRequest};
use crate::handlers::handle_domain_error;

/// Handler for POST /api/v1/bookings
///
/// # Request Body
///
/// ```json
/// { "passenger_id": 1, "activity_id": 3, "destination_id": 2 }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Non-positive ids, or the activity is not offered at
///   the destination
/// - 404 Not Found: Unknown passenger or activity
/// - 409 Conflict: Activity full or balance too low
pub async fn create_booking<S: Storage>(
    state: web::Data<AppState<S>>,
    body: web::Json<CreateBookingRequest>,
) -> HttpResponse {
    if let Err(response) = validate_body(&body.0) {
        return response;
    }

    respond_created(
        state
            .services
            .bookings
            .create_booking(body.passenger_id, body.activity_id, body.destination_id)
            .await,
    )
}

/// Handler for GET /api/v1/bookings/{id}
pub async fn get_booking<S: Storage>(
    state: web::Data<AppState<S>>,
    path: web::Path<i64>,
) -> HttpResponse {
    respond(
        state
            .services
            .bookings
            .get_booking_details(path.into_inner())
            .await,
    )
}

/// Handler for PUT /api/v1/bookings/{id}/status
///
/// ```json
/// { "status": "CANCELLED" }
/// ```
///
/// Cancelling refunds the passenger and frees the place. A cancelled booking
/// answers 409 to any further change.
pub async fn update_booking_status<S: Storage>(
    state: web::Data<AppState<S>>,
    path: web::Path<i64>,
    body: web::Json<UpdateBookingStatusRequest>,
) -> HttpResponse {
    if let Err(response) = validate_body(&body.0) {
        return response;
    }

    let status = match body.status.parse::<BookingStatus>() {
        Ok(status) => status,
        Err(message) => return handle_domain_error(&DomainError::Validation { message }),
    };

    respond(
        state
            .services
            .bookings
            .update_booking_status(path.into_inner(), status)
            .await,
    )
}
