//! DTOs de salud del servicio
//!
//! Payload fijo de `/ping` y metadatos de la API.

use serde::Serialize;

pub const API_TITLE: &str = "Centi_Salud API";
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const API_DESCRIPTION: &str =
    "API REST para la gestión integral de personal médico y especialistas";

// Response de GET /ping
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl Default for PingResponse {
    fn default() -> Self {
        Self {
            status: "online",
            message: "pong",
        }
    }
}

// Response de GET /
#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    pub title: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

impl Default for ApiInfoResponse {
    fn default() -> Self {
        Self {
            title: API_TITLE,
            version: API_VERSION,
            description: API_DESCRIPTION,
        }
    }
}
