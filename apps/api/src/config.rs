//! API server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. A `.env` file in the working directory is read first, if present.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use kasir_db::DbConfig;

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Interface to bind (default: 0.0.0.0)
    pub host: String,

    /// HTTP port (default: 8080)
    pub port: u16,

    /// SQLite database file (`DB_CONN`, then `DATABASE_PATH`, default: kasir.db)
    pub database_path: PathBuf,

    /// Pool size (default: 5)
    pub db_max_connections: u32,
}

impl ApiConfig {
    /// Load configuration from the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ApiConfig {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,

            database_path: lookup("DB_CONN")
                .or_else(|| lookup("DATABASE_PATH"))
                .unwrap_or_else(|| "kasir.db".to_string())
                .into(),

            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "5".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))?,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        Ok(config)
    }

    /// Socket address to listen on.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("HOST".to_string()))
    }

    /// Database settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path).max_connections(self.db_max_connections)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_path, PathBuf::from("kasir.db"));
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.bind_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_db_conn_takes_precedence() {
        let config = from_pairs(&[
            ("DB_CONN", "/data/pos.db"),
            ("DATABASE_PATH", "/other.db"),
        ])
        .unwrap();
        assert_eq!(config.database_path, PathBuf::from("/data/pos.db"));

        let config = from_pairs(&[("DATABASE_PATH", "/other.db")]).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/other.db"));
    }

    #[test]
    fn test_invalid_numbers() {
        let err = from_pairs(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PORT");

        assert!(from_pairs(&[("DB_MAX_CONNECTIONS", "0")]).is_err());
        assert!(from_pairs(&[("DB_MAX_CONNECTIONS", "-1")]).is_err());
    }

    #[test]
    fn test_bad_host() {
        let config = from_pairs(&[("HOST", "not a host")]).unwrap();
        assert!(config.bind_addr().is_err());
    }
}
