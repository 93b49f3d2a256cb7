//! Controller de Vehicle
//!
//! Alta de vehículos con verificación previa de que el servicio
//! dueño existe; nunca se persiste un vehículo huérfano.

use std::sync::Arc;

use validator::Validate;

use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::models::Vehicle;
use crate::storage::Storage;
use crate::utils::errors::{not_found_error, AppResult};

pub struct VehicleController {
    storage: Arc<dyn Storage>,
}

impl VehicleController {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<Vehicle> {
        request.validate()?;

        // Verificar que el servicio existe antes de insertar
        self.storage
            .find_service(request.service_id)
            .await?
            .ok_or_else(|| not_found_error("Car service", request.service_id))?;

        self.storage
            .insert_vehicle(
                request.service_id,
                request.vehicle_type,
                request.capacity,
                request.description,
            )
            .await
    }
}
