//! Extractores de la API
//!
//! Envuelven `Json` y `Path` de axum para que sus rechazos se respondan con
//! el mismo formato `{"detail": [{loc, msg, type}]}` que la validación.

use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path, Request,
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::utils::errors::{AppError, FieldErrorDetail};

/// Body JSON cuyo rechazo se convierte en `AppError::Rejected`
#[derive(Debug, Clone)]
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        Ok(Self(value))
    }
}

/// Parámetro `{id}` de la ruta como entero
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(path_rejection)?;
        Ok(Self(id))
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    let kind = match &rejection {
        JsonRejection::JsonDataError(_) => "type_error",
        JsonRejection::JsonSyntaxError(_) => "json_invalid",
        JsonRejection::MissingJsonContentType(_) => "content_type",
        _ => "body_invalid",
    };

    AppError::Rejected(FieldErrorDetail {
        loc: vec!["body".to_string()],
        msg: rejection.body_text(),
        kind: kind.to_string(),
    })
}

fn path_rejection(rejection: PathRejection) -> AppError {
    AppError::Rejected(FieldErrorDetail {
        loc: vec!["path".to_string(), "id".to_string()],
        msg: rejection.body_text(),
        kind: "int_parsing".to_string(),
    })
}
