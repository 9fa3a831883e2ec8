//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::StatField;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Dashboard view defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Ranking window size
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Most players in one comparison
    #[serde(default = "default_max_compare")]
    pub max_compare: usize,

    /// Default scatter X axis (field key)
    #[serde(default = "default_scatter_x")]
    pub scatter_x: String,

    /// Default scatter Y axis (field key)
    #[serde(default = "default_scatter_y")]
    pub scatter_y: String,
}

fn default_top_n() -> usize {
    10
}

fn default_max_compare() -> usize {
    crate::calculate::DEFAULT_MAX_COMPARE
}

fn default_scatter_x() -> String {
    StatField::MinutesPlayed.key().to_string()
}

fn default_scatter_y() -> String {
    StatField::PointsTotal.key().to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            max_compare: default_max_compare(),
            scatter_x: default_scatter_x(),
            scatter_y: default_scatter_y(),
        }
    }
}

impl DashboardConfig {
    /// Default scatter axes, parsed.
    pub fn scatter_axes(&self) -> Result<(StatField, StatField), ConfigError> {
        let parse = |key: &str| {
            StatField::parse(key).ok_or_else(|| {
                ConfigError::ValidationError(format!("Unknown scatter field: {}", key))
            })
        };
        Ok((parse(&self.scatter_x)?, parse(&self.scatter_y)?))
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Player statistics spreadsheet (CSV)
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("./data/players.csv")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_level: default_log_level(),
            server: ServerConfig::default(),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.dashboard.top_n == 0 {
            return Err(ConfigError::ValidationError(
                "Dashboard top_n must be greater than 0".to_string(),
            ));
        }

        if self.dashboard.max_compare == 0 {
            return Err(ConfigError::ValidationError(
                "Dashboard max_compare must be greater than 0".to_string(),
            ));
        }

        self.dashboard.scatter_axes()?;

        Ok(())
    }
}
