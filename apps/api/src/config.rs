//! Application configuration

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Where the league is kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// Whole-state JSON document on disk
    File(PathBuf),
    /// Process memory only
    Memory,
}

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `LEAGUE_STORAGE`: `file` (default) or `memory`
    /// - `LEAGUE_DATA_PATH`: JSON file location, default `league-data.json`
    /// - `LEAGUE_HOST`: bind address, default `0.0.0.0`
    /// - `LEAGUE_PORT`: bind port, default `3000`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage = match get("LEAGUE_STORAGE").as_deref().unwrap_or("file") {
            "file" => StorageConfig::File(PathBuf::from(
                get("LEAGUE_DATA_PATH").unwrap_or_else(|| "league-data.json".to_string()),
            )),
            "memory" => StorageConfig::Memory,
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "LEAGUE_STORAGE",
                    reason: format!("expected `file` or `memory`, got `{other}`"),
                })
            }
        };

        let host: IpAddr = get("LEAGUE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                field: "LEAGUE_HOST",
                reason: format!("{e}"),
            })?;

        let port: u16 = get("LEAGUE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                field: "LEAGUE_PORT",
                reason: format!("{e}"),
            })?;

        Ok(Self {
            storage,
            bind_addr: SocketAddr::new(host, port),
        })
    }
}
