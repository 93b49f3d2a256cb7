//! Implementación in-memory del Storage
//!
//! Fake para tests y desarrollo sin base de datos. Replica la semántica
//! de PgStorage: ids seriales, flags por defecto y la misma composición
//! AND de predicados en la búsqueda (construidos según los campos
//! presentes del filtro, nunca queries armadas por string).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::dto::service_dto::SearchServicesRequest;
use crate::models::{Booking, BookingStatus, CarService, Route, Vehicle, VehicleType};
use crate::storage::Storage;
use crate::utils::errors::AppResult;

#[derive(Default)]
struct Tables {
    services: Vec<CarService>,
    vehicles: Vec<Vehicle>,
    routes: Vec<Route>,
    bookings: Vec<Booking>,
    next_service_id: i32,
    next_vehicle_id: i32,
    next_route_id: i32,
    next_booking_id: i32,
}

#[derive(Default)]
pub struct MemoryStorage {
    inner: RwLock<Tables>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Desactivar un servicio (soft flag). Solo para armar fixtures;
    /// el surface público no expone deactivación todavía.
    pub async fn deactivate_service(&self, id: i32) {
        let mut inner = self.inner.write().await;
        if let Some(service) = inner.services.iter_mut().find(|s| s.id == id) {
            service.is_active = false;
        }
    }

    /// Marcar un vehículo como no disponible. Solo para fixtures.
    pub async fn set_vehicle_unavailable(&self, id: i32) {
        let mut inner = self.inner.write().await;
        if let Some(vehicle) = inner.vehicles.iter_mut().find(|v| v.id == id) {
            vehicle.is_available = false;
        }
    }

    /// Desactivar una ruta. Solo para fixtures.
    pub async fn deactivate_route(&self, id: i32) {
        let mut inner = self.inner.write().await;
        if let Some(route) = inner.routes.iter_mut().find(|r| r.id == id) {
            route.is_active = false;
        }
    }
}

type RoutePredicate = Box<dyn Fn(&Route) -> bool + Send + Sync>;
type VehiclePredicate = Box<dyn Fn(&Vehicle) -> bool + Send + Sync>;

/// Predicados de ruta construidos según los campos presentes del filtro
fn route_predicates(filter: &SearchServicesRequest) -> Vec<RoutePredicate> {
    let mut predicates: Vec<RoutePredicate> = Vec::new();
    if let Some(pickup_location) = filter.pickup_location.clone() {
        predicates.push(Box::new(move |r| r.pickup_location == pickup_location));
    }
    if let Some(destination) = filter.destination.clone() {
        predicates.push(Box::new(move |r| r.destination == destination));
    }
    predicates
}

/// Predicados de vehículo construidos según los campos presentes del filtro.
/// filter.pickup_time queda fuera a propósito: es un campo reservado sin
/// semántica de matching definida.
fn vehicle_predicates(filter: &SearchServicesRequest) -> Vec<VehiclePredicate> {
    let mut predicates: Vec<VehiclePredicate> = Vec::new();
    if let Some(vehicle_type) = filter.vehicle_type {
        predicates.push(Box::new(move |v| v.vehicle_type == vehicle_type));
    }
    if let Some(passenger_count) = filter.passenger_count {
        predicates.push(Box::new(move |v| v.capacity >= passenger_count));
    }
    predicates
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn insert_service(
        &self,
        name: String,
        phone: String,
        description: Option<String>,
    ) -> AppResult<CarService> {
        let mut inner = self.inner.write().await;
        inner.next_service_id += 1;
        let service = CarService {
            id: inner.next_service_id,
            name,
            phone,
            description,
            is_active: true,
            created_at: Utc::now(),
        };
        inner.services.push(service.clone());
        Ok(service)
    }

    async fn find_service(&self, id: i32) -> AppResult<Option<CarService>> {
        let inner = self.inner.read().await;
        Ok(inner.services.iter().find(|s| s.id == id).cloned())
    }

    async fn list_active_services(&self) -> AppResult<Vec<CarService>> {
        let inner = self.inner.read().await;
        Ok(inner
            .services
            .iter()
            .filter(|s| s.is_active)
            .cloned()
            .collect())
    }

    async fn search_services(&self, filter: &SearchServicesRequest) -> AppResult<Vec<CarService>> {
        let route_preds = route_predicates(filter);
        let vehicle_preds = vehicle_predicates(filter);
        let needs_route = filter.needs_route_match();
        let needs_vehicle = filter.needs_vehicle_match();

        let inner = self.inner.read().await;
        let mut results = Vec::new();

        for service in inner.services.iter().filter(|s| s.is_active) {
            if needs_route {
                let has_route = inner.routes.iter().any(|r| {
                    r.service_id == service.id
                        && r.is_active
                        && route_preds.iter().all(|p| p(r))
                });
                if !has_route {
                    continue;
                }
            }

            if needs_vehicle {
                let has_vehicle = inner.vehicles.iter().any(|v| {
                    v.service_id == service.id
                        && v.is_available
                        && vehicle_preds.iter().all(|p| p(v))
                });
                if !has_vehicle {
                    continue;
                }
            }

            results.push(service.clone());
        }

        Ok(results)
    }

    async fn insert_vehicle(
        &self,
        service_id: i32,
        vehicle_type: VehicleType,
        capacity: i32,
        description: Option<String>,
    ) -> AppResult<Vehicle> {
        let mut inner = self.inner.write().await;
        inner.next_vehicle_id += 1;
        let vehicle = Vehicle {
            id: inner.next_vehicle_id,
            service_id,
            vehicle_type,
            capacity,
            description,
            is_available: true,
            created_at: Utc::now(),
        };
        inner.vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    async fn find_vehicle(&self, id: i32) -> AppResult<Option<Vehicle>> {
        let inner = self.inner.read().await;
        Ok(inner.vehicles.iter().find(|v| v.id == id).cloned())
    }

    async fn vehicles_by_service(&self, service_id: i32) -> AppResult<Vec<Vehicle>> {
        let inner = self.inner.read().await;
        Ok(inner
            .vehicles
            .iter()
            .filter(|v| v.service_id == service_id)
            .cloned()
            .collect())
    }

    async fn insert_route(
        &self,
        service_id: i32,
        pickup_location: String,
        destination: String,
        price: Decimal,
        duration_minutes: Option<i32>,
    ) -> AppResult<Route> {
        let mut inner = self.inner.write().await;
        inner.next_route_id += 1;
        let route = Route {
            id: inner.next_route_id,
            service_id,
            pickup_location,
            destination,
            price,
            duration_minutes,
            is_active: true,
            created_at: Utc::now(),
        };
        inner.routes.push(route.clone());
        Ok(route)
    }

    async fn find_route(&self, id: i32) -> AppResult<Option<Route>> {
        let inner = self.inner.read().await;
        Ok(inner.routes.iter().find(|r| r.id == id).cloned())
    }

    async fn routes_by_service(&self, service_id: i32) -> AppResult<Vec<Route>> {
        let inner = self.inner.read().await;
        Ok(inner
            .routes
            .iter()
            .filter(|r| r.service_id == service_id)
            .cloned()
            .collect())
    }

    async fn insert_booking(
        &self,
        service_id: i32,
        route_id: i32,
        vehicle_id: Option<i32>,
        customer_name: String,
        customer_phone: String,
        pickup_time: DateTime<Utc>,
        passenger_count: i32,
        notes: Option<String>,
    ) -> AppResult<Booking> {
        let mut inner = self.inner.write().await;
        inner.next_booking_id += 1;
        let booking = Booking {
            id: inner.next_booking_id,
            service_id,
            route_id,
            vehicle_id,
            customer_name,
            customer_phone,
            pickup_time,
            passenger_count,
            status: BookingStatus::Pending,
            notes,
            created_at: Utc::now(),
        };
        inner.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn find_booking(&self, id: i32) -> AppResult<Option<Booking>> {
        let inner = self.inner.read().await;
        Ok(inner.bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn update_booking_status(
        &self,
        id: i32,
        status: BookingStatus,
    ) -> AppResult<Option<Booking>> {
        let mut inner = self.inner.write().await;
        match inner.bookings.iter_mut().find(|b| b.id == id) {
            Some(booking) => {
                booking.status = status;
                Ok(Some(booking.clone()))
            }
            None => Ok(None),
        }
    }

    async fn list_bookings(&self, service_id: Option<i32>) -> AppResult<Vec<Booking>> {
        let inner = self.inner.read().await;
        Ok(inner
            .bookings
            .iter()
            .filter(|b| service_id.map_or(true, |id| b.service_id == id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[tokio::test]
    async fn test_serial_ids_start_at_one() {
        let storage = MemoryStorage::new();
        let a = storage
            .insert_service("City Cars".to_string(), "111".to_string(), None)
            .await
            .unwrap();
        let b = storage
            .insert_service("Beach Rides".to_string(), "222".to_string(), None)
            .await
            .unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn test_booking_defaults_to_pending() {
        let storage = MemoryStorage::new();
        let booking = storage
            .insert_booking(
                1,
                1,
                None,
                "Ana".to_string(),
                "555-0100".to_string(),
                Utc::now(),
                2,
                None,
            )
            .await
            .unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.vehicle_id, None);
    }

    #[tokio::test]
    async fn test_price_round_trip() {
        let storage = MemoryStorage::new();
        let price = Decimal::from_str("25.50").unwrap();
        let route = storage
            .insert_route(1, "Airport".to_string(), "Beach".to_string(), price, None)
            .await
            .unwrap();
        let fetched = storage.find_route(route.id).await.unwrap().unwrap();
        assert_eq!(fetched.price, price);
        assert_eq!(fetched.price.to_string(), "25.50");
    }

    #[tokio::test]
    async fn test_update_status_missing_booking_returns_none() {
        let storage = MemoryStorage::new();
        let result = storage
            .update_booking_status(99, BookingStatus::Cancelled)
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
