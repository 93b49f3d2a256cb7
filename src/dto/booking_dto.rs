use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::models::BookingStatus;

// Request para crear una reserva
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub service_id: i32,
    pub route_id: i32,
    pub vehicle_id: Option<i32>,

    #[validate(length(min = 1, max = 255))]
    pub customer_name: String,

    #[validate(length(min = 1, max = 50))]
    pub customer_phone: String,

    pub pickup_time: DateTime<Utc>,

    #[validate(range(min = 1))]
    pub passenger_count: i32,

    pub notes: Option<String>,
}

// Request para actualizar el estado de una reserva.
// Cualquier estado puede pasar a cualquier otro; no hay tabla
// de transiciones.
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

// Query params para listar reservas
#[derive(Debug, Default, Deserialize)]
pub struct ListBookingsQuery {
    pub service_id: Option<i32>,
}
