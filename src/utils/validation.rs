//! Utilidades de validación
//!
//! Reglas reutilizables por los payloads de la API y funciones de
//! normalización de texto previas a la persistencia.

use validator::ValidationError;

/// Validar que un string no quede vacío tras recortar espacios
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("El campo no puede estar vacío ni contener solo espacios".into());
        return Err(error);
    }
    Ok(())
}

/// Validar que el correo interno no quede vacío tras normalizarlo
pub fn validate_correo_interno(value: &str) -> Result<(), ValidationError> {
    if normalize_correo(value).is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("El correo interno es obligatorio".into());
        return Err(error);
    }
    Ok(())
}

/// Recortar espacios al inicio y al final
pub fn normalize_text(value: &str) -> String {
    value.trim().to_string()
}

/// Recortar y pasar a mayúsculas
pub fn normalize_correo(value: &str) -> String {
    value.trim().to_uppercase()
}
