//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y el enum VehicleType.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Tipo de vehículo - mapea al ENUM vehicle_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "vehicle_type")]
pub enum VehicleType {
    #[serde(rename = "4-seater")]
    #[sqlx(rename = "4-seater")]
    FourSeater,
    #[serde(rename = "7-seater")]
    #[sqlx(rename = "7-seater")]
    SevenSeater,
    #[serde(rename = "16-seater")]
    #[sqlx(rename = "16-seater")]
    SixteenSeater,
    #[serde(rename = "other")]
    #[sqlx(rename = "other")]
    Other,
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub service_id: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub capacity: i32,
    pub description: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}
