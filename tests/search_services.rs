//! Tests de búsqueda de servicios sobre el fake in-memory.
//!
//! Cubren: búsqueda sin filtros, composición AND de filtros de ruta y
//! vehículo, exclusión de servicios inactivos / rutas inactivas /
//! vehículos no disponibles, y el campo pickup_time reservado.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use car_service_marketplace::controllers::service_controller::ServiceController;
use car_service_marketplace::dto::service_dto::SearchServicesRequest;
use car_service_marketplace::models::VehicleType;
use car_service_marketplace::storage::{MemoryStorage, Storage};

struct Fixture {
    storage: Arc<MemoryStorage>,
    airport_express_id: i32,
    city_cabs_id: i32,
    dormant_id: i32,
}

/// Tres proveedores:
/// - Airport Express: activo, ruta Airport→Beach activa (dos filas),
///   vehículo 7-seater disponible (dos filas).
/// - City Cabs: activo, ruta Downtown→Airport, vehículo 4-seater.
/// - Dormant Rides: activo pero con su ruta Airport→Beach desactivada
///   y su 7-seater marcado como no disponible.
/// - Ghost Cars: servicio desactivado con datos que matchearían.
async fn build_fixture() -> Fixture {
    let storage = Arc::new(MemoryStorage::new());
    let price = Decimal::from_str("25.50").unwrap();

    let airport_express = storage
        .insert_service("Airport Express".into(), "555-0001".into(), None)
        .await
        .unwrap();
    storage
        .insert_route(airport_express.id, "Airport".into(), "Beach".into(), price, Some(45))
        .await
        .unwrap();
    storage
        .insert_route(airport_express.id, "Airport".into(), "Beach".into(), price, Some(40))
        .await
        .unwrap();
    storage
        .insert_vehicle(airport_express.id, VehicleType::SevenSeater, 7, None)
        .await
        .unwrap();
    storage
        .insert_vehicle(airport_express.id, VehicleType::SevenSeater, 7, None)
        .await
        .unwrap();

    let city_cabs = storage
        .insert_service("City Cabs".into(), "555-0002".into(), None)
        .await
        .unwrap();
    storage
        .insert_route(city_cabs.id, "Downtown".into(), "Airport".into(), price, None)
        .await
        .unwrap();
    storage
        .insert_vehicle(city_cabs.id, VehicleType::FourSeater, 4, None)
        .await
        .unwrap();

    let dormant = storage
        .insert_service("Dormant Rides".into(), "555-0003".into(), None)
        .await
        .unwrap();
    let dormant_route = storage
        .insert_route(dormant.id, "Airport".into(), "Beach".into(), price, None)
        .await
        .unwrap();
    storage.deactivate_route(dormant_route.id).await;
    let dormant_vehicle = storage
        .insert_vehicle(dormant.id, VehicleType::SevenSeater, 7, None)
        .await
        .unwrap();
    storage.set_vehicle_unavailable(dormant_vehicle.id).await;

    let ghost = storage
        .insert_service("Ghost Cars".into(), "555-0004".into(), None)
        .await
        .unwrap();
    storage
        .insert_route(ghost.id, "Airport".into(), "Beach".into(), price, None)
        .await
        .unwrap();
    storage
        .insert_vehicle(ghost.id, VehicleType::SevenSeater, 7, None)
        .await
        .unwrap();
    storage.deactivate_service(ghost.id).await;

    Fixture {
        airport_express_id: airport_express.id,
        city_cabs_id: city_cabs.id,
        dormant_id: dormant.id,
        storage,
    }
}

#[tokio::test]
async fn test_search_without_filters_returns_all_active_services() {
    let fixture = build_fixture().await;
    let controller = ServiceController::new(fixture.storage.clone());

    let results = controller.search(SearchServicesRequest::default()).await.unwrap();

    let ids: Vec<i32> = results.iter().map(|s| s.id).collect();
    assert_eq!(
        ids,
        vec![fixture.airport_express_id, fixture.city_cabs_id, fixture.dormant_id]
    );
    assert!(results.iter().all(|s| s.is_active));
}

#[tokio::test]
async fn test_list_active_services_is_idempotent() {
    let fixture = build_fixture().await;
    let controller = ServiceController::new(fixture.storage.clone());

    let first = controller.list_active().await.unwrap();
    let second = controller.list_active().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[tokio::test]
async fn test_combined_route_and_vehicle_filter_matches_single_service() {
    let fixture = build_fixture().await;
    let controller = ServiceController::new(fixture.storage.clone());

    let filter = SearchServicesRequest {
        pickup_location: Some("Airport".into()),
        destination: Some("Beach".into()),
        vehicle_type: Some(VehicleType::SevenSeater),
        ..Default::default()
    };
    let results = controller.search(filter).await.unwrap();

    // Exactamente un servicio, sin duplicados pese a las filas múltiples
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, fixture.airport_express_id);
}

#[tokio::test]
async fn test_passenger_count_requires_enough_capacity() {
    let fixture = build_fixture().await;
    let controller = ServiceController::new(fixture.storage.clone());

    let filter = SearchServicesRequest {
        passenger_count: Some(5),
        ..Default::default()
    };
    let results = controller.search(filter).await.unwrap();

    // City Cabs solo tiene capacidad 4; Dormant Rides no tiene
    // vehículos disponibles
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, fixture.airport_express_id);
}

#[tokio::test]
async fn test_inactive_routes_and_unavailable_vehicles_do_not_match() {
    let fixture = build_fixture().await;
    let controller = ServiceController::new(fixture.storage.clone());

    let filter = SearchServicesRequest {
        pickup_location: Some("Airport".into()),
        destination: Some("Beach".into()),
        ..Default::default()
    };
    let results = controller.search(filter).await.unwrap();

    // Dormant Rides tiene la ruta desactivada; Ghost Cars está inactivo
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, fixture.airport_express_id);
}

#[tokio::test]
async fn test_pickup_time_is_accepted_but_does_not_constrain() {
    let fixture = build_fixture().await;
    let controller = ServiceController::new(fixture.storage.clone());

    let filter = SearchServicesRequest {
        pickup_time: Some(chrono::Utc::now()),
        ..Default::default()
    };
    let results = controller.search(filter).await.unwrap();

    // Campo reservado: se comporta igual que una búsqueda sin filtros
    assert_eq!(results.len(), 3);
}

#[tokio::test]
async fn test_unmatched_search_returns_empty_not_error() {
    let fixture = build_fixture().await;
    let controller = ServiceController::new(fixture.storage.clone());

    let filter = SearchServicesRequest {
        pickup_location: Some("Mountain".into()),
        ..Default::default()
    };
    let results = controller.search(filter).await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_service_details_includes_nested_vehicles_and_routes() {
    let fixture = build_fixture().await;
    let controller = ServiceController::new(fixture.storage.clone());

    let details = controller
        .details(fixture.airport_express_id)
        .await
        .unwrap()
        .expect("service should exist");

    assert_eq!(details.service.name, "Airport Express");
    assert_eq!(details.vehicles.len(), 2);
    assert_eq!(details.routes.len(), 2);

    let missing = controller.details(999).await.unwrap();
    assert!(missing.is_none());
}
