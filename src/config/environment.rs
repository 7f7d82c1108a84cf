//! Configuración de variables de entorno
//! 
//! Este módulo maneja la configuración del entorno. Todas las variables son
//! opcionales salvo `DATABASE_URL` con el backend PostgreSQL; un valor
//! presente pero inválido es un error de arranque.

use std::env;
use std::str::FromStr;

use thiserror::Error;
use tracing::Level;

use crate::services::DEFAULT_UPCOMING_LIMIT;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Backend de persistencia
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(()),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub dashboard_upcoming_limit: i64,
    pub store_backend: StoreBackend,
    pub log_level: Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            request_timeout_secs: 30,
            dashboard_upcoming_limit: DEFAULT_UPCOMING_LIMIT,
            store_backend: StoreBackend::Postgres,
            log_level: Level::INFO,
        }
    }
}

/// Lee `key` y la parsea; si no existe devuelve `default`.
fn env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}

impl EnvironmentConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let dashboard_upcoming_limit =
            env_or("DASHBOARD_UPCOMING_LIMIT", defaults.dashboard_upcoming_limit)?;
        if dashboard_upcoming_limit < 0 {
            return Err(ConfigError::Invalid {
                key: "DASHBOARD_UPCOMING_LIMIT",
                value: dashboard_upcoming_limit.to_string(),
            });
        }

        Ok(Self {
            environment: env_or("ENVIRONMENT", defaults.environment)?,
            port: env_or("PORT", defaults.port)?,
            host: env_or("HOST", defaults.host)?,
            cors_origins,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?,
            dashboard_upcoming_limit,
            store_backend: env_or("RENTAL_STORE", defaults.store_backend)?,
            log_level: env_or("LOG_LEVEL", defaults.log_level)?,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_backend_parsing() {
        assert_eq!("memory".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
        assert_eq!("PostgreSQL".parse::<StoreBackend>(), Ok(StoreBackend::Postgres));
        assert!("sqlite".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::default();
        assert!(config.is_development());
        assert_eq!(config.dashboard_upcoming_limit, 5);
        assert_eq!(config.server_url(), "0.0.0.0:3000");
    }
}
