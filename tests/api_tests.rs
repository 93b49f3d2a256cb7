//! Tests del surface HTTP con el router real sobre el fake in-memory.
//!
//! Verifican el mapeo de errores a status codes: 404 para referencias
//! inexistentes, 400 para violaciones de campos, 409 para pertenencia
//! incorrecta.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::{routing::get, Json, Router};
use rust_decimal::Decimal;
use serde_json::json;
use tower::ServiceExt;

use car_service_marketplace::config::environment::EnvironmentConfig;
use car_service_marketplace::models::VehicleType;
use car_service_marketplace::routes;
use car_service_marketplace::state::AppState;
use car_service_marketplace::storage::{MemoryStorage, Storage};

fn build_app(storage: Arc<MemoryStorage>) -> Router {
    let state = AppState::new(storage, EnvironmentConfig::default());
    Router::new()
        .route(
            "/health",
            get(|| async { Json(json!({ "status": "ok" })) }),
        )
        .nest("/api/services", routes::service_routes::create_service_router())
        .nest("/api/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/routes", routes::route_routes::create_route_router())
        .nest("/api/bookings", routes::booking_routes::create_booking_router())
        .with_state(state)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = build_app(Arc::new(MemoryStorage::new()));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_service_returns_ok() {
    let app = build_app(Arc::new(MemoryStorage::new()));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/services",
            json!({ "name": "Airport Express", "phone": "555-0001" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_vehicle_for_missing_service_returns_404() {
    let app = build_app(Arc::new(MemoryStorage::new()));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/vehicles",
            json!({ "service_id": 42, "type": "4-seater", "capacity": 4 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_capacity_returns_400() {
    let storage = Arc::new(MemoryStorage::new());
    storage
        .insert_service("Airport Express".into(), "555-0001".into(), None)
        .await
        .unwrap();
    let app = build_app(storage);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/vehicles",
            json!({ "service_id": 1, "type": "other", "capacity": 0 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_with_foreign_route_returns_409() {
    let storage = Arc::new(MemoryStorage::new());
    let service_a = storage
        .insert_service("Service A".into(), "555-0001".into(), None)
        .await
        .unwrap();
    let service_b = storage
        .insert_service("Service B".into(), "555-0002".into(), None)
        .await
        .unwrap();
    let foreign_route = storage
        .insert_route(service_b.id, "Airport".into(), "Beach".into(), Decimal::ONE, None)
        .await
        .unwrap();
    let app = build_app(storage);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/bookings",
            json!({
                "service_id": service_a.id,
                "route_id": foreign_route.id,
                "customer_name": "Ana García",
                "customer_phone": "555-0100",
                "pickup_time": "2025-09-01T10:00:00Z",
                "passenger_count": 2
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_get_missing_service_details_returns_404() {
    let app = build_app(Arc::new(MemoryStorage::new()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/services/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_services_accepts_partial_filter() {
    let storage = Arc::new(MemoryStorage::new());
    let service = storage
        .insert_service("Airport Express".into(), "555-0001".into(), None)
        .await
        .unwrap();
    storage
        .insert_vehicle(service.id, VehicleType::SevenSeater, 7, None)
        .await
        .unwrap();
    let app = build_app(storage);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/services/search",
            json!({ "vehicle_type": "7-seater" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
