//! Controller de CarService
//!
//! Alta de proveedores, listado de activos, detalle con vehículos y
//! rutas anidados, y la búsqueda compuesta con deduplicación.

use std::collections::HashSet;
use std::sync::Arc;

use validator::Validate;

use crate::dto::service_dto::{
    CreateCarServiceRequest, SearchServicesRequest, ServiceDetailsResponse,
};
use crate::models::CarService;
use crate::storage::Storage;
use crate::utils::errors::AppResult;

pub struct ServiceController {
    storage: Arc<dyn Storage>,
}

impl ServiceController {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, request: CreateCarServiceRequest) -> AppResult<CarService> {
        request.validate()?;

        self.storage
            .insert_service(request.name, request.phone, request.description)
            .await
    }

    pub async fn list_active(&self) -> AppResult<Vec<CarService>> {
        self.storage.list_active_services().await
    }

    /// Búsqueda con filtro parcial. El store puede devolver el mismo
    /// servicio varias veces cuando el join multiplica filas; acá se
    /// deduplica por id conservando el orden de primera aparición.
    pub async fn search(&self, filter: SearchServicesRequest) -> AppResult<Vec<CarService>> {
        let rows = self.storage.search_services(&filter).await?;
        Ok(dedup_by_first_seen(rows))
    }

    /// Detalle del servicio con sus vehículos y rutas.
    /// Devuelve None si el id no existe.
    pub async fn details(&self, id: i32) -> AppResult<Option<ServiceDetailsResponse>> {
        let service = match self.storage.find_service(id).await? {
            Some(service) => service,
            None => return Ok(None),
        };

        let vehicles = self.storage.vehicles_by_service(id).await?;
        let routes = self.storage.routes_by_service(id).await?;

        Ok(Some(ServiceDetailsResponse {
            service,
            vehicles,
            routes,
        }))
    }
}

/// Deduplicación por id conservando el orden de primera aparición
fn dedup_by_first_seen(services: Vec<CarService>) -> Vec<CarService> {
    let mut seen = HashSet::new();
    services
        .into_iter()
        .filter(|s| seen.insert(s.id))
        .collect()
}
