//! Rutas de salud y metadatos

use axum::{routing::get, Json, Router};

use crate::dto::health_dto::{ApiInfoResponse, PingResponse};
use crate::state::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new()
        .route("/", get(api_info))
        .route("/ping", get(ping))
}

/// Verifica la disponibilidad del servicio
async fn ping() -> Json<PingResponse> {
    Json(PingResponse::default())
}

async fn api_info() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse::default())
}
