//! Modelo de CarService
//!
//! Este módulo contiene el struct CarService que mapea exactamente
//! a la tabla car_services con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Proveedor de servicio de transporte - mapea a la tabla car_services
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct CarService {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
