use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Carepath";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Connection-string variable for the backing store. Required.
pub const DATABASE_ENV: &str = "CAREPATH_DATABASE";
/// Optional bind-address override.
pub const ADDR_ENV: &str = "CAREPATH_ADDR";

const DEFAULT_ADDR: &str = "127.0.0.1:4000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{DATABASE_ENV} environment variable is not set")]
    MissingDatabase,

    #[error("Invalid bind address {value:?}: {reason}")]
    InvalidAddr { value: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Read configuration from the environment. A missing database
    /// variable is fatal — the caller must not serve traffic without it.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var(DATABASE_ENV).ok(), env::var(ADDR_ENV).ok())
    }

    fn from_vars(database: Option<String>, addr: Option<String>) -> Result<Self, ConfigError> {
        let database = database
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingDatabase)?;

        let addr_value = addr.unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr = addr_value.parse().map_err(|e| ConfigError::InvalidAddr {
            value: addr_value,
            reason: format!("{e}"),
        })?;

        Ok(Self {
            database_path: PathBuf::from(database),
            bind_addr,
        })
    }
}

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "carepath=info,tower_http=warn"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_database_is_fatal() {
        let err = Config::from_vars(None, None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDatabase));
    }

    #[test]
    fn blank_database_is_fatal() {
        let err = Config::from_vars(Some("  ".into()), None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDatabase));
    }

    #[test]
    fn default_addr_applies() {
        let config = Config::from_vars(Some("/tmp/directory.db".into()), None).unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_ADDR);
        assert_eq!(config.database_path, PathBuf::from("/tmp/directory.db"));
    }

    #[test]
    fn addr_override_is_parsed() {
        let config = Config::from_vars(
            Some("/tmp/directory.db".into()),
            Some("0.0.0.0:8080".into()),
        )
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn bad_addr_is_rejected() {
        let err =
            Config::from_vars(Some("/tmp/directory.db".into()), Some("not-an-addr".into()))
                .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { .. }));
    }
}
