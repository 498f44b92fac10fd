//! Acceso a datos de médicos
//!
//! Una conexión por operación y una sentencia parametrizada por conexión.

use async_trait::async_trait;
use tracing::debug;

use crate::database::DatabaseConnection;
use crate::models::Medico;
use crate::utils::errors::{AppError, AppResult};

/// Acceso a datos de la tabla `medicos`.
///
/// "No encontrado" y "ninguna fila afectada" no son errores: se expresan con
/// `Option` y `bool`. Los errores quedan para conexión y sentencias fallidas.
#[async_trait]
pub trait MedicoStore: Send + Sync {
    async fn list_all(&self) -> AppResult<Vec<Medico>>;

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Medico>>;

    /// Insertar y devolver el ID generado por la base de datos
    async fn create(
        &self,
        nombre: &str,
        especialidad: &str,
        correo_interno: &str,
    ) -> AppResult<i64>;

    /// `true` si se actualizó exactamente una fila
    async fn update(
        &self,
        id: i64,
        nombre: &str,
        especialidad: &str,
        correo_interno: &str,
    ) -> AppResult<bool>;

    /// `true` si se eliminó una fila
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// ID generado por un INSERT, o `Persistence` si no hubo fila o ID
pub(crate) fn inserted_id(rows_affected: u64, last_insert_id: u64) -> AppResult<i64> {
    match i64::try_from(last_insert_id) {
        Ok(id) if rows_affected > 0 && id > 0 => Ok(id),
        _ => Err(AppError::Persistence(
            "Error crítico al insertar el médico".to_string(),
        )),
    }
}

pub struct MySqlMedicoRepository {
    db: DatabaseConnection,
}

impl MySqlMedicoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MedicoStore for MySqlMedicoRepository {
    async fn list_all(&self) -> AppResult<Vec<Medico>> {
        let mut conn = self.db.open().await?;
        let result = sqlx::query_as::<_, Medico>(
            "SELECT id_medico, nombre, especialidad, correo_interno FROM medicos",
        )
        .fetch_all(&mut conn)
        .await;
        self.db.release(conn).await;

        let medicos = result?;
        debug!("Recuperados {} médicos", medicos.len());
        Ok(medicos)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Medico>> {
        let mut conn = self.db.open().await?;
        let result = sqlx::query_as::<_, Medico>(
            "SELECT id_medico, nombre, especialidad, correo_interno FROM medicos WHERE id_medico = ?",
        )
        .bind(id)
        .fetch_optional(&mut conn)
        .await;
        self.db.release(conn).await;

        Ok(result?)
    }

    async fn create(
        &self,
        nombre: &str,
        especialidad: &str,
        correo_interno: &str,
    ) -> AppResult<i64> {
        let mut conn = self.db.open().await?;
        let result = sqlx::query(
            "INSERT INTO medicos (nombre, especialidad, correo_interno) VALUES (?, ?, ?)",
        )
        .bind(nombre)
        .bind(especialidad)
        .bind(correo_interno)
        .execute(&mut conn)
        .await;
        self.db.release(conn).await;

        let done = result?;
        let id = inserted_id(done.rows_affected(), done.last_insert_id())?;

        debug!("Médico insertado con ID {}", id);
        Ok(id)
    }

    async fn update(
        &self,
        id: i64,
        nombre: &str,
        especialidad: &str,
        correo_interno: &str,
    ) -> AppResult<bool> {
        let mut conn = self.db.open().await?;
        let result = sqlx::query(
            r#"
            UPDATE medicos
            SET nombre = ?, especialidad = ?, correo_interno = ?
            WHERE id_medico = ?
            "#,
        )
        .bind(nombre)
        .bind(especialidad)
        .bind(correo_interno)
        .bind(id)
        .execute(&mut conn)
        .await;
        self.db.release(conn).await;

        Ok(result?.rows_affected() == 1)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut conn = self.db.open().await?;
        let result = sqlx::query("DELETE FROM medicos WHERE id_medico = ?")
            .bind(id)
            .execute(&mut conn)
            .await;
        self.db.release(conn).await;

        Ok(result?.rows_affected() > 0)
    }
}
