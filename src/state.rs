//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El Storage viaja inyectado detrás de un
//! Arc<dyn>, así los tests enchufan el fake in-memory sin tocar nada más.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::storage::Storage;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, config: EnvironmentConfig) -> Self {
        Self { storage, config }
    }
}
