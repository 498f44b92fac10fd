//! Controlador de médicos
//!
//! Orquesta validación, verificación de existencia, escritura y relectura.

use std::sync::Arc;
use tracing::info;

use crate::dto::medico_dto::{DeleteMedicoResponse, MedicoRequest};
use crate::models::Medico;
use crate::repositories::MedicoStore;
use crate::utils::errors::{medico_not_found, AppError, AppResult};

pub struct MedicoController {
    store: Arc<dyn MedicoStore>,
}

impl MedicoController {
    pub fn new(store: Arc<dyn MedicoStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Medico>> {
        self.store.list_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Medico> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| medico_not_found(id))
    }

    pub async fn create(&self, request: MedicoRequest) -> AppResult<Medico> {
        // Validar antes de tocar la base de datos
        let fields = request.into_fields()?;

        let id = self
            .store
            .create(&fields.nombre, &fields.especialidad, &fields.correo_interno)
            .await?;

        info!("✅ Médico {} creado", id);
        self.refetch(id).await
    }

    pub async fn update(&self, id: i64, request: MedicoRequest) -> AppResult<Medico> {
        let fields = request.into_fields()?;

        // Verificación de existencia
        if self.store.get_by_id(id).await?.is_none() {
            return Err(medico_not_found(id));
        }

        let updated = self
            .store
            .update(id, &fields.nombre, &fields.especialidad, &fields.correo_interno)
            .await?;
        if !updated {
            return Err(AppError::Persistence(
                "No se pudo procesar la actualización en la base de datos".to_string(),
            ));
        }

        info!("✅ Médico {} actualizado", id);
        self.refetch(id).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<DeleteMedicoResponse> {
        if self.store.get_by_id(id).await?.is_none() {
            return Err(medico_not_found(id));
        }

        if !self.store.delete(id).await? {
            return Err(AppError::Persistence(
                "Error al intentar eliminar el registro".to_string(),
            ));
        }

        info!("🗑️ Médico {} eliminado", id);
        Ok(DeleteMedicoResponse::new(id))
    }

    // Tras una escritura exitosa la fila debe existir
    async fn refetch(&self, id: i64) -> AppResult<Medico> {
        self.store.get_by_id(id).await?.ok_or_else(|| {
            AppError::Persistence(format!(
                "El médico {} no pudo recuperarse tras la escritura",
                id
            ))
        })
    }
}
