//! Conexión a MySQL
//!
//! Cada operación del repositorio abre su propia conexión y la cierra al
//! terminar. No hay pool: la conexión vive lo que dura una sentencia.

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::DatabaseConfig;
use crate::utils::errors::{AppError, AppResult};

/// Fábrica de conexiones de corta duración
#[derive(Debug, Clone)]
pub struct DatabaseConnection {
    options: MySqlConnectOptions,
    connect_timeout: Option<Duration>,
    target: String,
}

impl DatabaseConnection {
    pub fn new(config: &DatabaseConfig) -> Self {
        Self {
            options: config.connect_options(),
            connect_timeout: config.connect_timeout,
            target: config.masked_url(),
        }
    }

    /// Destino de conexión con la contraseña enmascarada
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Abrir una conexión nueva; falla rápido con `AppError::Connection`
    pub async fn open(&self) -> AppResult<MySqlConnection> {
        debug!("Abriendo conexión a {}", self.target);

        let connect = self.options.connect();
        let result = match self.connect_timeout {
            Some(limit) => tokio::time::timeout(limit, connect)
                .await
                .unwrap_or_else(|_| {
                    Err(sqlx::Error::Io(std::io::Error::new(
                        std::io::ErrorKind::TimedOut,
                        format!("connect timed out after {:?}", limit),
                    )))
                }),
            None => connect.await,
        };

        result.map_err(|e| {
            warn!("No se pudo conectar a {}: {}", self.target, e);
            AppError::Connection(e)
        })
    }

    /// Cerrar la conexión; un fallo al cerrar solo se registra
    pub async fn release(&self, conn: MySqlConnection) {
        if let Err(e) = conn.close().await {
            warn!("Error cerrando conexión a {}: {}", self.target, e);
        }
    }

    /// Comprobar que MySQL responde
    pub async fn ping(&self) -> AppResult<()> {
        let mut conn = self.open().await?;
        let result = conn.ping().await;
        self.release(conn).await;
        result.map_err(AppError::Database)
    }
}
