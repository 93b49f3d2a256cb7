use serde::Deserialize;
use validator::Validate;

use crate::models::VehicleType;

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    pub service_id: i32,

    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,

    #[validate(range(min = 1))]
    pub capacity: i32,

    pub description: Option<String>,
}
