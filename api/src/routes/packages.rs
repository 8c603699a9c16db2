//! Travel package endpoints

use actix_web::{web, HttpResponse};

use ta_core::repositories::Storage;

use super::{respond, respond_created, validate_body};
use crate::app::AppState;
use crate::dto::{AddDestinationRequest, CreatePackageRequest, UpdateCapacityRequest, UpdateNameRequest};

/// Handler for POST /api/v1/packages
pub async fn create_package<S: Storage>(
    state: web::Data<AppState<S>>,
    body: web::Json<CreatePackageRequest>,
) -> HttpResponse {
    if let Err(response) = validate_body(&body.0) {
        return response;
    }

    respond_created(
        state
            .services
            .packages
            .create_travel_package(&body.name, &body.description, body.capacity)
            .await,
    )
}

/// Handler for GET /api/v1/packages/{id}
///
/// The package is returned with its destinations and their activities.
pub async fn get_package<S: Storage>(
    state: web::Data<AppState<S>>,
    path: web::Path<i64>,
) -> HttpResponse {
    respond(
        state
            .services
            .packages
            .get_travel_package_details(path.into_inner())
            .await,
    )
}

/// Handler for PUT /api/v1/packages/{id}/name
pub async fn update_package_name<S: Storage>(
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
            .packages
            .update_travel_package_name(path.into_inner(), &body.name)
            .await,
    )
}

/// Handler for PUT /api/v1/packages/{id}/capacity
pub async fn update_package_capacity<S: Storage>(
    state: web::Data<AppState<S>>,
    path: web::Path<i64>,
    body: web::Json<UpdateCapacityRequest>,
) -> HttpResponse {
    if let Err(response) = validate_body(&body.0) {
        return response;
    }

    respond(
        state
            .services
            .packages
            .update_travel_package_passenger_capacity(path.into_inner(), body.capacity)
            .await,
    )
}

/// Handler for POST /api/v1/packages/{id}/destinations
///
/// Adding a destination already on the itinerary returns the package unchanged.
pub async fn add_destination<S: Storage>(
    state: web::Data<AppState<S>>,
    path: web::Path<i64>,
    body: web::Json<AddDestinationRequest>,
) -> HttpResponse {
    respond(
        state
            .services
            .packages
            .add_destination_to_package(path.into_inner(), body.destination_id)
            .await,
    )
}
