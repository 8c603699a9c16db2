//! Activity endpoints

use actix_web::{web, HttpResponse};

use ta_core::repositories::Storage;

use super::{respond, respond_created, validate_body};
use crate::app::AppState;
use crate::dto::{CreateActivityRequest, UpdateCapacityRequest, UpdateCostRequest};

/// Handler for POST /api/v1/activities
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Tea ceremony",
///     "description": "Ninety minutes in Gion",
///     "cost": 45.0,
///     "capacity": 12,
///     "destination_id": 1
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Empty name, negative cost or capacity
/// - 404 Not Found: Unknown destination
pub async fn create_activity<S: Storage>(
    state: web::Data<AppState<S>>,
    body: web::Json<CreateActivityRequest>,
) -> HttpResponse {
    if let Err(response) = validate_body(&body.0) {
        return response;
    }

    respond_created(
        state
            .services
            .activities
            .create_activity(body.into_inner().into())
            .await,
    )
}

/// Handler for GET /api/v1/activities/available
pub async fn available_activities<S: Storage>(state: web::Data<AppState<S>>) -> HttpResponse {
    respond(state.services.activities.available_activities().await)
}

/// Handler for GET /api/v1/activities/{id}
pub async fn get_activity<S: Storage>(
    state: web::Data<AppState<S>>,
    path: web::Path<i64>,
) -> HttpResponse {
    respond(
        state
            .services
            .activities
            .get_activity_details(path.into_inner())
            .await,
    )
}

/// Handler for PUT /api/v1/activities/{id}/capacity
pub async fn update_activity_capacity<S: Storage>(
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
            .activities
            .update_activity_capacity(path.into_inner(), body.capacity)
            .await,
    )
}

/// Handler for PUT /api/v1/activities/{id}/cost
pub async fn update_activity_cost<S: Storage>(
    state: web::Data<AppState<S>>,
    path: web::Path<i64>,
    body: web::Json<UpdateCostRequest>,
) -> HttpResponse {
    if let Err(response) = validate_body(&body.0) {
        return response;
    }

    respond(
        state
            .services
            .activities
            .update_activity_cost(path.into_inner(), body.cost)
            .await,
    )
}
