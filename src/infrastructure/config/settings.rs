//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable
//! overrides matching the deployment environment (`MODEL_URL`,
//! `MODEL_VERSION`, `DATASET_HASH`, `MODEL_TIMEOUT_MS`). A `.env` file is
//! honored when present.
//!
//! # Example
//!
//! ```no_run
//! use riskgate::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.logging.init();
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::inference::InferenceConfig;
use super::logging::LoggingConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file with [`Config::load`], or from environment
/// variables alone with [`Config::from_env`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Prediction subsystem settings.
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file, then apply environment
    /// overrides and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// value fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from defaults plus environment variables only.
    ///
    /// # Errors
    ///
    /// Returns an error if an override fails to parse or a value fails
    /// validation.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Config::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(url) = std::env::var("MODEL_URL") {
            self.inference.service_url = url;
        }
        if let Ok(version) = std::env::var("MODEL_VERSION") {
            self.inference.model_version = version;
        }
        if let Ok(hash) = std::env::var("DATASET_HASH") {
            self.inference.dataset_hash = hash;
        }
        if let Ok(timeout) = std::env::var("MODEL_TIMEOUT_MS") {
            self.inference.timeout_ms =
                timeout
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        field: "MODEL_TIMEOUT_MS",
                        reason: format!("not an integer: {timeout:?}"),
                    })?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !self.inference.service_url.is_empty() {
            Url::parse(&self.inference.service_url).map_err(|e| ConfigError::InvalidValue {
                field: "inference.service_url",
                reason: e.to_string(),
            })?;
        }
        if self.inference.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "inference.timeout_ms",
                reason: "time budget must be positive".into(),
            }
            .into());
        }
        Ok(())
    }

    /// Parse configuration from a TOML string without touching the
    /// environment. Used by tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML fails to parse or validate.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}
