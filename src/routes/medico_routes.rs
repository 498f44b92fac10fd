//! Rutas CRUD de `/medicos`

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::controllers::MedicoController;
use crate::dto::medico_dto::{DeleteMedicoResponse, MedicoRequest};
use crate::extractors::{AppJson, IdPath};
use crate::models::Medico;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_medico_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_medicos).post(create_medico))
        .route(
            "/:id",
            get(get_medico).put(update_medico).delete(delete_medico),
        )
}

async fn list_medicos(State(state): State<AppState>) -> Result<Json<Vec<Medico>>, AppError> {
    let controller = MedicoController::new(state.store.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_medico(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Medico>, AppError> {
    let controller = MedicoController::new(state.store.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_medico(
    State(state): State<AppState>,
    AppJson(request): AppJson<MedicoRequest>,
) -> Result<(StatusCode, Json<Medico>), AppError> {
    let controller = MedicoController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_medico(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    AppJson(request): AppJson<MedicoRequest>,
) -> Result<Json<Medico>, AppError> {
    let controller = MedicoController::new(state.store.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_medico(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<DeleteMedicoResponse>, AppError> {
    let controller = MedicoController::new(state.store.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
