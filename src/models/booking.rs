//! Modelo de Booking
//!
//! Este módulo contiene el struct Booking y el enum BookingStatus.
//! El estado inicia siempre en 'pending' y solo cambia mediante
//! updates explícitos; no hay transiciones automáticas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Estado de la reserva - mapea al ENUM booking_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// Booking principal - mapea exactamente a la tabla bookings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub service_id: i32,
    pub route_id: i32,
    pub vehicle_id: Option<i32>,
    pub customer_name: String,
    pub customer_phone: String,
    pub pickup_time: DateTime<Utc>,
    pub passenger_count: i32,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
