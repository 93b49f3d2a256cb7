//! Controller de Route
//!
//! Alta de rutas con verificación previa del servicio dueño.
//! El precio viaja como Decimal y se persiste con dos decimales
//! exactos (NUMERIC(10,2)).

use std::sync::Arc;

use validator::Validate;

use crate::dto::route_dto::CreateRouteRequest;
use crate::models::Route;
use crate::storage::Storage;
use crate::utils::errors::{not_found_error, AppResult};

pub struct RouteController {
    storage: Arc<dyn Storage>,
}

impl RouteController {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, request: CreateRouteRequest) -> AppResult<Route> {
        request.validate()?;

        // Verificar que el servicio existe antes de insertar
        self.storage
            .find_service(request.service_id)
            .await?
            .ok_or_else(|| not_found_error("Car service", request.service_id))?;

        self.storage
            .insert_route(
                request.service_id,
                request.pickup_location,
                request.destination,
                request.price,
                request.duration_minutes,
            )
            .await
    }
}
