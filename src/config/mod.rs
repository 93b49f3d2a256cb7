//! Configuración del sistema
//!
//! Variables de entorno y configuración de base de datos.

pub mod database;
pub mod environment;
