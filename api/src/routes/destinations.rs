//! Destination endpoints

use actix_web::{web, HttpResponse};

use ta_core::repositories::Storage;

use super::{respond, respond_created, validate_body};
use crate::app::AppState;
use crate::dto::{CreateDestinationRequest, UpdateNameRequest};
use crate::handlers::handle_domain_error;

/// Handler for POST /api/v1/destinations
///
/// # Request Body
///
/// ```json
/// { "name": "Kyoto" }
/// ```
pub async fn create_destination<S: Storage>(
    state: web::Data<AppState<S>>,
    body: web::Json<CreateDestinationRequest>,
) -> HttpResponse {
    if let Err(response) = validate_body(&body.0) {
        return response;
    }

    respond_created(state.services.destinations.create_destination(&body.name).await)
}

/// Handler for GET /api/v1/destinations
pub async fn list_destinations<S: Storage>(state: web::Data<AppState<S>>) -> HttpResponse {
    respond(state.services.destinations.list_destinations().await)
}

/// Handler for GET /api/v1/destinations/{id}
///
/// The destination is returned with its activities.
pub async fn get_destination<S: Storage>(
    state: web::Data<AppState<S>>,
    path: web::Path<i64>,
) -> HttpResponse {
    respond(
        state
            .services
            .destinations
            .get_destination_details(path.into_inner())
            .await,
    )
}

/// Handler for PUT /api/v1/destinations/{id}/name
pub async fn update_destination_name<S: Storage>(
    state: web::Data<AppState<S>>,
    path: web::Path<i64>,
    body: web::Json<UpdateNameRequest>,
) -> HttpResponse {
    if let Err(response) = validate_body(&body.0) {
        return response;
    }

    respond(
        state
            .services
            .destinations
            .update_destination_name(path.into_inner(), &body.name)
            .await,
    )
}

/// Handler for GET /api/v1/destinations/{id}/activities
pub async fn destination_activities<S: Storage>(
    state: web::Data<AppState<S>>,
    path: web::Path<i64>,
) -> HttpResponse {
    let id = path.into_inner();

    // An unknown destination is a 404 rather than an empty list
    if let Err(error) = state.services.destinations.get_destination_details(id).await {
        return handle_domain_error(&error);
    }

    respond(state.services.activities.activities_for_destination(id).await)
}
