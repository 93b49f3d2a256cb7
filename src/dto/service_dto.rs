use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{CarService, Route, Vehicle, VehicleType};

// Request para registrar un proveedor de servicio
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarServiceRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 50))]
    pub phone: String,

    pub description: Option<String>,
}

// Filtro de búsqueda - todos los campos son opcionales.
// pickup_time se acepta en el shape pero no participa del filtrado
// (reservado; sin semántica definida todavía).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SearchServicesRequest {
    pub pickup_location: Option<String>,
    pub destination: Option<String>,
    pub vehicle_type: Option<VehicleType>,
    pub pickup_time: Option<DateTime<Utc>>,
    pub passenger_count: Option<i32>,
}

impl SearchServicesRequest {
    /// El filtro requiere join con routes si hay algún campo de ruta
    pub fn needs_route_match(&self) -> bool {
        self.pickup_location.is_some() || self.destination.is_some()
    }

    /// El filtro requiere join con vehicles si hay algún campo de vehículo
    pub fn needs_vehicle_match(&self) -> bool {
        self.vehicle_type.is_some() || self.passenger_count.is_some()
    }
}

// Response de detalle: servicio con sus vehículos y rutas anidados
#[derive(Debug, Serialize)]
pub struct ServiceDetailsResponse {
    #[serde(flatten)]
    pub service: CarService,
    pub vehicles: Vec<Vehicle>,
    pub routes: Vec<Route>,
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}
