//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; `PRICESWEEP_API_URL` overrides
//! the catalog URL.
//!
//! # Example
//!
//! ```no_run
//! use pricesweep::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use super::logging::LoggingConfig;
use crate::adapter::outbound::catalog::CatalogConfig;
use crate::application::scan::ScanConfig;
use crate::error::{ConfigError, Result};

/// Environment variable that overrides `catalog.api_url`.
pub const API_URL_ENV: &str = "PRICESWEEP_API_URL";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Catalog API connection settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Scan bounds and stepping policy.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse and validate configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a value fails validation.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.catalog.api_url = url;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        self.catalog.validate()?;
        self.scan.validate()?;
        Ok(())
    }

    pub fn init_logging(&self) {
        self.logging.init();
    }
}
