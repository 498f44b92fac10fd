//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del servicio de médicos
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};
use validator::{ValidationError, ValidationErrors};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// No se pudo abrir la conexión con MySQL
    #[error("Connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// La sentencia falló una vez establecida la conexión
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// Body o parámetro de ruta que no se pudo extraer
    #[error("Rejected request: {}", .0.msg)]
    Rejected(FieldErrorDetail),

    #[error("Not found: {0}")]
    NotFound(String),

    /// La escritura no afectó filas o no devolvió ID pese a pasar las verificaciones
    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Entrada de error de validación con la forma `{loc, msg, type}`
#[derive(Debug, Serialize, PartialEq)]
pub struct FieldErrorDetail {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Connection(e) => {
                error!("❌ No se pudo conectar a la base de datos: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "detail": "No se pudo establecer conexión con la base de datos" }),
                )
            }

            AppError::Database(e) => {
                error!("❌ Error ejecutando sentencia: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "detail": "Error interno al acceder a la base de datos" }),
                )
            }

            AppError::Validation(errors) => {
                warn!("Payload rechazado: {}", errors);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({ "detail": validation_details(&errors) }),
                )
            }

            AppError::Rejected(detail) => {
                warn!("Request rechazado: {}", detail.msg);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({ "detail": [detail] }),
                )
            }

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "detail": msg })),

            AppError::Persistence(msg) => {
                error!("❌ Inconsistencia de persistencia: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "detail": msg }))
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Aplanar `ValidationErrors` en una lista ordenada por campo
pub fn validation_details(errors: &ValidationErrors) -> Vec<FieldErrorDetail> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| FieldErrorDetail {
                loc: vec!["body".to_string(), field.to_string()],
                msg: describe(e),
                kind: e.code.to_string(),
            })
        })
        .collect()
}

fn describe(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    match error.code.as_ref() {
        "length" => {
            let min = error.params.get("min").and_then(|v| v.as_u64());
            let max = error.params.get("max").and_then(|v| v.as_u64());
            match (min, max) {
                (Some(min), Some(max)) => {
                    format!("La longitud debe estar entre {} y {} caracteres", min, max)
                }
                (None, Some(max)) => format!("La longitud máxima es de {} caracteres", max),
                (Some(min), None) => format!("La longitud mínima es de {} caracteres", min),
                (None, None) => "Longitud inválida".to_string(),
            }
        }
        code => format!("Valor inválido ({})", code),
    }
}

/// Función helper para crear errores de recurso no encontrado
pub fn medico_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Médico con ID {} no encontrado", id))
}
