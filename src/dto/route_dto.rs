use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::validate_positive_price;

// Request para crear una ruta
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteRequest {
    pub service_id: i32,

    #[validate(length(min = 1, max = 255))]
    pub pickup_location: String,

    #[validate(length(min = 1, max = 255))]
    pub destination: String,

    #[validate(custom = "validate_positive_price")]
    pub price: Decimal,

    #[validate(range(min = 1))]
    pub duration_minutes: Option<i32>,
}
