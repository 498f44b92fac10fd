//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Es inmutable: cada request solo lee.

use std::sync::Arc;

use crate::config::EnvironmentConfig;
use crate::repositories::MedicoStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MedicoStore>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn MedicoStore>, config: EnvironmentConfig) -> Self {
        Self { store, config }
    }
}
