//! Configuration for the ticket endpoint.
//!
//! Configuration is stored in the platform config directory
//! (`corkboard/config.yaml`) and includes:
//! - The listing endpoint URL
//! - An optional API key sent as a bearer token
//!
//! Environment variables override the file: `CORKBOARD_ENDPOINT` and
//! `CORKBOARD_API_KEY`. A CLI `--endpoint` flag overrides both.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CorkboardError, Result};

/// The listing endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

pub const ENDPOINT_ENV: &str = "CORKBOARD_ENDPOINT";
pub const API_KEY_ENV: &str = "CORKBOARD_API_KEY";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Listing endpoint URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Authentication credentials
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Config {
    /// Get the path to the config file, if the platform has a config dir
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "corkboard")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Config::default());
        };
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Err(CorkboardError::Config(
                "no usable config directory on this platform".to_string(),
            ));
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get the endpoint from environment, config file, or built-in default
    pub fn endpoint(&self) -> String {
        if let Ok(url) = env::var(ENDPOINT_ENV)
            && !url.is_empty()
        {
            return url;
        }

        self.endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Resolve and validate the endpoint, giving a CLI override top priority
    pub fn resolved_endpoint(&self, cli_override: Option<&str>) -> Result<Url> {
        let raw = match cli_override {
            Some(url) => url.to_string(),
            None => self.endpoint(),
        };

        Url::parse(&raw)
            .map_err(|e| CorkboardError::Config(format!("invalid endpoint URL '{}': {}", raw, e)))
    }

    /// Get the API key from environment or config file
    pub fn api_key(&self) -> Option<String> {
        if let Ok(key) = env::var(API_KEY_ENV)
            && !key.is_empty()
        {
            return Some(key);
        }

        self.auth.api_key.clone()
    }

    /// Set the endpoint URL
    pub fn set_endpoint(&mut self, endpoint: String) {
        self.endpoint = Some(endpoint);
    }

    /// Set the API key
    pub fn set_api_key(&mut self, api_key: String) {
        self.auth.api_key = Some(api_key);
    }
}
