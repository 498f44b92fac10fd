//! Rutas de la API
//!
//! Ensambla los routers con las capas de CORS y trazas.

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

pub mod health_routes;
pub mod medico_routes;

/// Router completo de la API con sus capas de CORS y trazas
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .merge(health_routes::create_health_router())
        .nest("/medicos", medico_routes::create_medico_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
