mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Loads `.env`, then the YAML file at `CONFIG_PATH` (default `config.yaml`),
/// then applies environment overrides.
pub async fn load() -> Result<Config> {
    dotenvy::dotenv().ok();

    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    load_from_path(&config_path)
        .await?
        .with_env_overrides(|key| env::var(key).ok())
}

/// Reads a YAML configuration file. A missing file yields defaults.
pub async fn load_from_path(config_path: impl AsRef<Path>) -> Result<Config> {
    let config_path = config_path.as_ref();

    if !config_path.exists() {
        debug!("No configuration file at {}, using defaults", config_path.display());
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", config_path.display());

    let config_str = tokio::fs::read_to_string(config_path).await?;
    Config::from_yaml_str(&config_str)
}

impl Config {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(s)?)
    }

    /// Applies `GEMINI_API_KEY`, `LLM_MODEL`, `SERVER_HOST` and `SERVER_PORT`
    /// from `lookup` on top of the file values.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV) {
            self.llm.api_key = key;
        }
        if let Some(model) = lookup("LLM_MODEL") {
            self.llm.model = model;
        }
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("Invalid SERVER_PORT: '{}'", port)))?;
        }
        Ok(self)
    }
}
