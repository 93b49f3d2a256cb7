//! Car Service Marketplace
//!
//! Backend del marketplace de servicios de transporte: proveedores
//! publican servicios con vehículos y rutas; los clientes buscan por
//! ubicación, tipo de vehículo y pasajeros, y crean reservas con
//! validación referencial completa.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod storage;
pub mod utils;
