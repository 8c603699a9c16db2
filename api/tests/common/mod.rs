//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::{test, web};
use serde_json::Value;

use ta_api::AppState;
use ta_core::domain::entities::PassengerType;
use ta_core::repositories::InMemoryStorage;
use ta_core::services::{BookingServiceConfig, NewActivity, ServiceRegistry};
use ta_shared::config::AppConfig;

pub type TestState = web::Data<AppState<InMemoryStorage>>;

pub fn state() -> TestState {
    let registry = ServiceRegistry::new(
        Arc::new(InMemoryStorage::new()),
        BookingServiceConfig::default(),
    );
    web::Data::new(AppState::new(registry))
}

pub fn config() -> AppConfig {
    AppConfig::development()
}

/// Catalogue and passengers shared by the booking tests
pub struct Seed {
    pub destination_id: i64,
    pub other_destination_id: i64,
    pub activity_id: i64,
    pub standard_id: i64,
    pub gold_id: i64,
    pub premium_id: i64,
}

/// Two destinations, one 100.00 activity with `capacity` places,
/// and one passenger per tier holding `balance`
pub async fn seed(state: &TestState, capacity: i32, balance: f64) -> Seed {
    let services = &state.services;

    let kyoto = services.destinations.create_destination("Kyoto").await.unwrap();
    let osaka = services.destinations.create_destination("Osaka").await.unwrap();

    let activity = services
        .activities
        .create_activity(NewActivity {
            name: "Tea ceremony".to_string(),
            description: "Ninety minutes in Gion".to_string(),
            cost: 100.0,
            capacity,
            destination_id: kyoto.destination_id,
        })
        .await
        .unwrap();

    let mut ids = Vec::new();
    for (name, passenger_type) in [
        ("Ada", PassengerType::Standard),
        ("Grace", PassengerType::Gold),
        ("Edsger", PassengerType::Premium),
    ] {
        let passenger = services
            .passengers
            .create_passenger(name, "+447700900123", passenger_type, balance)
            .await
            .unwrap();
        ids.push(passenger.passenger_id);
    }

    Seed {
        destination_id: kyoto.destination_id,
        other_destination_id: osaka.destination_id,
        activity_id: activity.activity_id,
        standard_id: ids[0],
        gold_id: ids[1],
        premium_id: ids[2],
    }
}

/// Parse the body of a response as JSON
pub async fn json_body<B: MessageBody>(response: ServiceResponse<B>) -> Value {
    let bytes = test::read_body(response).await;
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
