//! Modelo de Route
//!
//! Este módulo contiene el struct Route que mapea exactamente
//! a la tabla routes. El precio se almacena como NUMERIC(10,2)
//! y debe conservar los dos decimales sin deriva de precisión.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Route principal - trayecto pickup → destination con precio fijo
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Route {
    pub id: i32,
    pub service_id: i32,
    pub pickup_location: String,
    pub destination: String,
    pub price: Decimal,
    pub duration_minutes: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
