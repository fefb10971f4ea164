// src/config.rs

//! Loads the scan endpoint settings from `config.toml` in the platform config
//! directory, with an environment override for the endpoint URL.

use crate::logging::project_directory;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

pub const CONFIG_FILE: &str = "config.toml";
pub const ENDPOINT_ENV: &str = "MEDICINE_DASHBOARD_ENDPOINT";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/scan-medicine/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid scan endpoint {0:?}: {1}")]
    Endpoint(String, String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_endpoint", deserialize_with = "deserialize_endpoint")]
    pub endpoint: Url,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
}

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_upload_bytes() -> u64 {
    10 * 1024 * 1024 // 10 MiB
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn deserialize_endpoint<'de, D>(deserializer: D) -> Result<Url, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_endpoint(&raw).map_err(serde::de::Error::custom)
}

/// Parses an endpoint URL, accepting only `http` and `https`.
pub fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::Endpoint(raw.to_string(), e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Endpoint(
            raw.to_string(),
            format!("unsupported scheme '{other}'"),
        )),
    }
}

pub fn config_path() -> PathBuf {
    if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_dir().join(CONFIG_FILE)
    } else {
        PathBuf::from(".").join(CONFIG_FILE)
    }
}

impl Config {
    /// Loads the config from the default location, then applies the
    /// environment override. A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(&config_path())?;
        config.apply_endpoint_override(std::env::var(ENDPOINT_ENV).ok().as_deref())?;
        info!(endpoint = %config.scan.endpoint, "Configuration loaded.");
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults.");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn apply_endpoint_override(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        if let Some(raw) = value.filter(|v| !v.trim().is_empty()) {
            self.scan.endpoint = parse_endpoint(raw)?;
            debug!(endpoint = %self.scan.endpoint, "Endpoint overridden from environment.");
        }
        Ok(())
    }
}
