//! Server configuration file support.
//!
//! This module provides utilities for reading server configuration from
//! TOML configuration files, with environment variable overrides for the
//! bind address.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "RSSCHED_CONFIG";

/// Raised when a configuration file cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(String),
    #[error("Failed to parse config file: {0}")]
    Parse(String),
}

/// Server configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub store: StoreSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

/// Instance store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_max_instances")]
    pub max_instances: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_body_bytes() -> usize {
    // Solver responses for large timetables run into tens of megabytes.
    50 * 1024 * 1024
}

fn default_max_instances() -> usize {
    64
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            max_instances: default_max_instances(),
        }
    }
}

impl ServerConfig {
    /// Load server configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ServerConfig)` if successful
    /// * `Err(ConfigError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Read(e.to_string()))?;

        let config: ServerConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// Load server configuration for this process.
    ///
    /// The file named by `RSSCHED_CONFIG` wins; otherwise `server.toml` in
    /// the current directory is used when present, and built-in defaults
    /// apply when no file exists. `HOST` and `PORT` environment variables
    /// override the file in all cases.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => {
                let fallback = PathBuf::from("server.toml");
                if fallback.exists() {
                    Self::from_file(&fallback)?
                } else {
                    ServerConfig::default()
                }
            }
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply `HOST` and `PORT` overrides from the environment.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("HOST") {
            if !host.is_empty() {
                self.server.host = host;
            }
        }
        if let Ok(port) = std::env::var("PORT") {
            match port.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => {
                    log::warn!("ignoring invalid PORT value '{}'", port);
                }
            }
        }
    }

    /// Socket address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
