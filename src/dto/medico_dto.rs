//! DTOs de médicos
//!
//! Body de creación/actualización con sus reglas de validación y la
//! normalización previa a la persistencia.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::errors::AppResult;
use crate::utils::validation::{
    normalize_correo, normalize_text, validate_correo_interno, validate_not_blank,
};

pub const ESPECIALIDAD_POR_DEFECTO: &str = "General";

fn default_especialidad() -> String {
    ESPECIALIDAD_POR_DEFECTO.to_string()
}

// Body de POST /medicos y PUT /medicos/{id}
//
// Los campos ausentes se deserializan como vacíos para que la validación
// los reporte junto al resto en lugar de cortar en el primer error de serde.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MedicoRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 50), custom = "validate_not_blank")]
    pub nombre: String,

    #[serde(default = "default_especialidad")]
    #[validate(length(min = 1, max = 50), custom = "validate_not_blank")]
    pub especialidad: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 100), custom = "validate_correo_interno")]
    pub correo_interno: String,
}

// Campos ya validados y normalizados, listos para el repositorio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicoFields {
    pub nombre: String,
    pub especialidad: String,
    pub correo_interno: String,
}

impl MedicoRequest {
    /// Validar todas las reglas y devolver los campos normalizados
    pub fn into_fields(self) -> AppResult<MedicoFields> {
        self.validate()?;

        Ok(MedicoFields {
            nombre: normalize_text(&self.nombre),
            especialidad: normalize_text(&self.especialidad),
            correo_interno: normalize_correo(&self.correo_interno),
        })
    }
}

// Response de DELETE /medicos/{id}
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DeleteMedicoResponse {
    pub mensaje: String,
    pub id_medico: i64,
}

impl DeleteMedicoResponse {
    pub fn new(id_medico: i64) -> Self {
        Self {
            mensaje: "Médico eliminado exitosamente".to_string(),
            id_medico,
        }
    }
}
