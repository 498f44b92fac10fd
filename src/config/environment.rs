//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del servidor HTTP.

use super::{env_or, parse_number, ConfigError};

/// Configuración del entorno
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub cors_origins: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            cors_origins: Vec::new(),
        }
    }
}

impl EnvironmentConfig {
    /// Leer `HOST`, `PORT`, `LOG_LEVEL` y `CORS_ORIGINS`
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            host: env_or("HOST", &defaults.host),
            port: parse_number("PORT", &env_or("PORT", "8000"))?,
            log_level: env_or("LOG_LEVEL", &defaults.log_level),
            cors_origins: parse_origins(&env_or("CORS_ORIGINS", "")),
        })
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
