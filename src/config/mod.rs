pub mod indexer;
pub mod log;
pub mod risk;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use toml;
use tracing::debug;

pub use indexer::IndexerConfig;
pub use log::LoggingConfig;
pub use risk::RiskPolicyConfig;

use crate::constants::INDEXER_URL_ENV;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub indexer: IndexerConfig,
    pub risk:    RiskPolicyConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Apply overrides from the environment (and `.env` if present).
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(raw) = dotenvy::var(INDEXER_URL_ENV) {
            let base_url = raw
                .parse()
                .map_err(|e| ConfigError::ParseError(format!("{}={}: {}", INDEXER_URL_ENV, raw, e)))?;
            debug!("config_env_override::{}::{}", INDEXER_URL_ENV, raw);
            self.indexer.base_url = base_url;
        }
        Ok(())
    }
}

pub fn load_config(path: impl AsRef<Path>) -> crate::Result<Config> {
    let path = path.as_ref();
    let config_str = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::OpenFileError(format!("{}: {}", path.display(), e)))?;
    let config: Config = toml::from_str(&config_str).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    Ok(config)
}

/// Load `path` if it exists, otherwise fall back to defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> crate::Result<Config> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        debug!("config_not_found::using_defaults::{}", path.display());
        Ok(Config::default())
    }
}
