//! Route handlers and the route table
//!
//! Every handler is generic over the storage backend so the same table
//! serves the in-memory and MySQL deployments.

pub mod activities;
pub mod bookings;
pub mod destinations;
pub mod health;
pub mod packages;
pub mod passengers;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use validator::Validate;

use ta_core::errors::DomainResult;
use ta_core::repositories::Storage;
use ta_shared::ApiResponse;

use crate::handlers::{handle_domain_error, handle_validation_errors};

/// Register every endpoint on `cfg`
pub fn configure<S: Storage>(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check::<S>))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/destinations")
                        .route("", web::post().to(destinations::create_destination::<S>))
                        .route("", web::get().to(destinations::list_destinations::<S>))
                        .route("/{id}", web::get().to(destinations::get_destination::<S>))
                        .route(
                            "/{id}/name",
                            web::put().to(destinations::update_destination_name::<S>),
                        )
                        .route(
                            "/{id}/activities",
                            web::get().to(destinations::destination_activities::<S>),
                        ),
                )
                .service(
                    web::scope("/activities")
                        .route("", web::post().to(activities::create_activity::<S>))
                        .route("/available", web::get().to(activities::available_activities::<S>))
                        .route("/{id}", web::get().to(activities::get_activity::<S>))
                        .route(
                            "/{id}/capacity",
                            web::put().to(activities::update_activity_capacity::<S>),
                        )
                        .route("/{id}/cost", web::put().to(activities::update_activity_cost::<S>)),
                )
                .service(
                    web::scope("/packages")
                        .route("", web::post().to(packages::create_package::<S>))
                        .route("/{id}", web::get().to(packages::get_package::<S>))
                        .route("/{id}/name", web::put().to(packages::update_package_name::<S>))
                        .route(
                            "/{id}/capacity",
                            web::put().to(packages::update_package_capacity::<S>),
                        )
                        .route(
                            "/{id}/destinations",
                            web::post().to(packages::add_destination::<S>),
                        ),
                )
                .service(
                    web::scope("/passengers")
                        .route("", web::post().to(passengers::create_passenger::<S>))
                        .route("/{id}", web::get().to(passengers::get_passenger::<S>))
                        .route(
                            "/{id}/balance",
                            web::put().to(passengers::update_passenger_balance::<S>),
                        )
                        .route(
                            "/{id}/bookings",
                            web::get().to(passengers::passenger_bookings::<S>),
                        ),
                )
                .service(
                    web::scope("/bookings")
                        .route("", web::post().to(bookings::create_booking::<S>))
                        .route("/{id}", web::get().to(bookings::get_booking::<S>))
                        .route(
                            "/{id}/status",
                            web::put().to(bookings::update_booking_status::<S>),
                        ),
                ),
        );
}

/// 200 with the `ApiResponse` envelope, or the mapped error
pub(crate) fn respond<T: Serialize>(result: DomainResult<T>) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::Ok().json(ApiResponse::success(data)),
        Err(error) => handle_domain_error(&error),
    }
}

/// 201 with the `ApiResponse` envelope, or the mapped error
pub(crate) fn respond_created<T: Serialize>(result: DomainResult<T>) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::Created().json(ApiResponse::success(data)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Run `validator` rules, returning the 400 response on failure
pub(crate) fn validate_body<T: Validate>(body: &T) -> Result<(), HttpResponse> {
    body.validate().map_err(|errors| handle_validation_errors(&errors))
}
