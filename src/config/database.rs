//! Configuración de base de datos
//!
//! Parámetros de conexión a MySQL. Se cargan una sola vez al arrancar y se
//! pasan explícitamente al repositorio.

use sqlx::mysql::MySqlConnectOptions;
use std::time::Duration;

use super::{env_or, parse_number, ConfigError};

/// Configuración de la base de datos
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
    pub charset: String,
    pub connect_timeout: Option<Duration>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            user: "root".to_string(),
            password: String::new(),
            database: "cenit_salud_db".to_string(),
            port: 3306,
            charset: "utf8mb4".to_string(),
            connect_timeout: None,
        }
    }
}

impl DatabaseConfig {
    /// Leer `DB_*` del entorno, con los valores por defecto para los ausentes
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let connect_timeout = match std::env::var("DB_CONNECT_TIMEOUT_SECS") {
            Ok(secs) => Some(Duration::from_secs(parse_number(
                "DB_CONNECT_TIMEOUT_SECS",
                &secs,
            )?)),
            Err(_) => None,
        };

        Ok(Self {
            host: env_or("DB_HOST", &defaults.host),
            user: env_or("DB_USER", &defaults.user),
            password: env_or("DB_PASSWORD", &defaults.password),
            database: env_or("DB_NAME", &defaults.database),
            port: parse_number("DB_PORT", &env_or("DB_PORT", "3306"))?,
            charset: env_or("DB_CHARSET", &defaults.charset),
            connect_timeout,
        })
    }

    /// Opciones de conexión para el driver MySQL
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .charset(&self.charset)
    }

    /// Destino de conexión apto para logs (sin contraseña)
    pub fn masked_url(&self) -> String {
        let credentials = if self.password.is_empty() {
            self.user.clone()
        } else {
            format!("{}:***", self.user)
        };
        format!(
            "mysql://{}@{}:{}/{}",
            credentials, self.host, self.port, self.database
        )
    }
}
