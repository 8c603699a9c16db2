//! Passenger endpoints

use actix_web::{web, HttpResponse};

use ta_core::domain::entities::PassengerType;
use ta_core::errors::DomainError;
use ta_core::repositories::Storage;

use super::{respond, respond_created, validate_body};
use crate::app::AppState;
use crate::dto::{CreatePassengerRequest, UpdateBalanceRequest};
use crate::handlers::handle_domain_error;

/// Handler for POST /api/v1/passengers
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Ada Lovelace",
///     "mobile": "+447700900123",
///     "passenger_type": "GOLD",
///     "balance": 250.0
/// }
/// ```
pub async fn create_passenger<S: Storage>(
    state: web::Data<AppState<S>>,
    body: web::Json<CreatePassengerRequest>,
) -> HttpResponse {
    if let Err(response) = validate_body(&body.0) {
        return response;
    }

    let passenger_type = match body.passenger_type.parse::<PassengerType>() {
        Ok(passenger_type) => passenger_type,
        Err(message) => return handle_domain_error(&DomainError::Validation { message }),
    };

    respond_created(
        state
            .services
            .passengers
            .create_passenger(&body.name, &body.mobile, passenger_type, body.balance)
            .await,
    )
}

/// Handler for GET /api/v1/passengers/{id}
///
/// The passenger is returned with their active bookings.
pub async fn get_passenger<S: Storage>(
    state: web::Data<AppState<S>>,
    path: web::Path<i64>,
) -> HttpResponse {
    respond(
        state
            .services
            .passengers
            .get_passenger_details(path.into_inner())
            .await,
    )
}

/// Handler for PUT /api/v1/passengers/{id}/balance
pub async fn update_passenger_balance<S: Storage>(
    state: web::Data<AppState<S>>,
    path: web::Path<i64>,
    body: web::Json<UpdateBalanceRequest>,
) -> HttpResponse {
    if let Err(response) = validate_body(&body.0) {
        return response;
    }

    respond(
        state
            .services
            .passengers
            .update_passenger_balance(path.into_inner(), body.balance)
            .await,
    )
}

/// Handler for GET /api/v1/passengers/{id}/bookings
///
/// Full booking history, cancelled bookings included.
pub async fn passenger_bookings<S: Storage>(
    state: web::Data<AppState<S>>,
    path: web::Path<i64>,
) -> HttpResponse {
    respond(
        state
            .services
            .bookings
            .passenger_bookings(path.into_inner())
            .await,
    )
}
