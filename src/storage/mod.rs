//! Capa de acceso a datos
//!
//! Este módulo define el trait Storage que abstrae el store relacional.
//! La implementación productiva es PgStorage (PostgreSQL vía SQLx);
//! MemoryStorage es el fake in-memory que usan los tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::dto::service_dto::SearchServicesRequest;
use crate::models::{Booking, BookingStatus, CarService, Route, Vehicle, VehicleType};
use crate::utils::errors::AppResult;

pub use memory::MemoryStorage;
pub use postgres::PgStorage;

/// Interfaz inyectable del store relacional.
///
/// Cada operación es una lectura o una escritura de fila única;
/// la integridad referencial se valida en los controllers antes
/// de llamar a cualquier insert.
#[async_trait]
pub trait Storage: Send + Sync {
    // car_services
    async fn insert_service(
        &self,
        name: String,
        phone: String,
        description: Option<String>,
    ) -> AppResult<CarService>;

    async fn find_service(&self, id: i32) -> AppResult<Option<CarService>>;

    async fn list_active_services(&self) -> AppResult<Vec<CarService>>;

    /// Búsqueda compuesta sobre services/routes/vehicles.
    ///
    /// Puede devolver filas repetidas por servicio cuando el join
    /// multiplica resultados; el caller deduplica por id conservando
    /// el orden de primera aparición.
    async fn search_services(&self, filter: &SearchServicesRequest) -> AppResult<Vec<CarService>>;

    // vehicles
    async fn insert_vehicle(
        &self,
        service_id: i32,
        vehicle_type: VehicleType,
        capacity: i32,
        description: Option<String>,
    ) -> AppResult<Vehicle>;

    async fn find_vehicle(&self, id: i32) -> AppResult<Option<Vehicle>>;

    async fn vehicles_by_service(&self, service_id: i32) -> AppResult<Vec<Vehicle>>;

    // routes
    async fn insert_route(
        &self,
        service_id: i32,
        pickup_location: String,
        destination: String,
        price: Decimal,
        duration_minutes: Option<i32>,
    ) -> AppResult<Route>;

    async fn find_route(&self, id: i32) -> AppResult<Option<Route>>;

    async fn routes_by_service(&self, service_id: i32) -> AppResult<Vec<Route>>;

    // bookings
    #[allow(clippy::too_many_arguments)]
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
    ) -> AppResult<Booking>;

    async fn find_booking(&self, id: i32) -> AppResult<Option<Booking>>;

    /// Sobrescribe el estado sin tabla de transiciones.
    /// Devuelve None si la reserva no existe.
    async fn update_booking_status(
        &self,
        id: i32,
        status: BookingStatus,
    ) -> AppResult<Option<Booking>>;

    async fn list_bookings(&self, service_id: Option<i32>) -> AppResult<Vec<Booking>>;
}
