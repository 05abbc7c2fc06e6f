//! Server and dataset configuration.
//!
//! Configuration is read from an optional TOML file and then overridden by
//! environment variables, in that order. Everything has a default, so the
//! server starts with no configuration at all when `main_data.csv` sits in
//! the working directory.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {name} value '{value}'")]
    InvalidEnv { name: &'static str, value: String },
}

/// Top-level dashboard configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Dataset settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Path to the rentals CSV
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("main_data.csv")
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the effective configuration.
    ///
    /// Reads the file named by `BRI_CONFIG` (default `bri.toml`) when it
    /// exists, then applies `HOST`, `PORT` and `DATA_PATH` environment
    /// overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::var("BRI_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("bri.toml"));

        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        if let Ok(host) = env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                name: "PORT",
                value: port,
            })?;
        }
        if let Ok(data_path) = env::var("DATA_PATH") {
            config.data.csv_path = PathBuf::from(data_path);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.data.csv_path, PathBuf::from("main_data.csv"));
    }

    #[test]
    fn test_parse_full_file() {
        let config: DashboardConfig = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [data]
            csv_path = "data/main_data.csv"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.data.csv_path, PathBuf::from("data/main_data.csv"));
    }

    #[test]
    fn test_parse_partial_file_uses_defaults() {
        let config: DashboardConfig = toml::from_str(
            r#"
            [server]
            port = 3000
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.data.csv_path, PathBuf::from("main_data.csv"));
    }
}
