//! Controller de Booking
//!
//! Ciclo de vida de reservas: creación con validación referencial
//! completa, actualización de estado y listado. La validación corre
//! en orden fijo y corta en el primer fallo, siempre antes de
//! persistir nada.

use std::sync::Arc;

use validator::Validate;

use crate::dto::booking_dto::{CreateBookingRequest, UpdateBookingStatusRequest};
use crate::models::Booking;
use crate::storage::Storage;
use crate::utils::errors::{not_found_error, ownership_error, AppResult};

pub struct BookingController {
    storage: Arc<dyn Storage>,
}

impl BookingController {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, request: CreateBookingRequest) -> AppResult<Booking> {
        request.validate()?;

        self.verify_references(request.service_id, request.route_id, request.vehicle_id)
            .await?;

        self.storage
            .insert_booking(
                request.service_id,
                request.route_id,
                request.vehicle_id,
                request.customer_name,
                request.customer_phone,
                request.pickup_time,
                request.passenger_count,
                request.notes,
            )
            .await
    }

    /// Validación referencial en orden fijo:
    /// servicio existe → ruta existe → ruta pertenece al servicio →
    /// vehículo existe → vehículo pertenece al servicio.
    /// El primer fallo corta el resto de los checks.
    async fn verify_references(
        &self,
        service_id: i32,
        route_id: i32,
        vehicle_id: Option<i32>,
    ) -> AppResult<()> {
        self.storage
            .find_service(service_id)
            .await?
            .ok_or_else(|| not_found_error("Car service", service_id))?;

        let route = self
            .storage
            .find_route(route_id)
            .await?
            .ok_or_else(|| not_found_error("Route", route_id))?;

        if route.service_id != service_id {
            return Err(ownership_error("Route", route_id, service_id));
        }

        if let Some(vehicle_id) = vehicle_id {
            let vehicle = self
                .storage
                .find_vehicle(vehicle_id)
                .await?
                .ok_or_else(|| not_found_error("Vehicle", vehicle_id))?;

            if vehicle.service_id != service_id {
                return Err(ownership_error("Vehicle", vehicle_id, service_id));
            }
        }

        Ok(())
    }

    /// Sobrescribe el estado sin restricciones de transición.
    /// Cualquier estado puede pasar a cualquier otro.
    pub async fn update_status(
        &self,
        id: i32,
        request: UpdateBookingStatusRequest,
    ) -> AppResult<Booking> {
        self.storage
            .update_booking_status(id, request.status)
            .await?
            .ok_or_else(|| not_found_error("Booking", id))
    }

    pub async fn list(&self, service_id: Option<i32>) -> AppResult<Vec<Booking>> {
        self.storage.list_bookings(service_id).await
    }
}
