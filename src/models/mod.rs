//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod booking;
pub mod route;
pub mod service;
pub mod vehicle;

pub use booking::{Booking, BookingStatus};
pub use route::Route;
pub use service::CarService;
pub use vehicle::{Vehicle, VehicleType};
