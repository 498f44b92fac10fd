//! Modelo de Medico
//!
//! Mapea exactamente a la tabla `medicos` de MySQL.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Registro de personal médico
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Medico {
    pub id_medico: i64,
    pub nombre: String,
    pub especialidad: String,
    pub correo_interno: String,
}
