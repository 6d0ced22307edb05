//! Catalog API connection settings.

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

/// Where the catalog lives and how to talk to it.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog API (e.g. `https://api.ecommerce.com`).
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Path of the products listing, relative to `api_url`.
    #[serde(default = "default_products_path")]
    pub products_path: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Attempts per request for timeouts and connection failures. 1 disables retry.
    #[serde(default = "default_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Backoff between attempts in milliseconds.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

fn default_api_url() -> String {
    "https://api.ecommerce.com".into()
}

fn default_products_path() -> String {
    "/products".into()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

const fn default_retry_max_attempts() -> u32 {
    1
}

const fn default_retry_backoff_ms() -> u64 {
    500
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            products_path: default_products_path(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            retry_max_attempts: default_retry_max_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

impl CatalogConfig {
    /// Full URL of the products endpoint.
    pub fn products_url(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(self.api_url.trim())?;
        let joined = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            self.products_path.trim_start_matches('/')
        );
        url.set_path(&joined);
        Ok(url)
    }

    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" });
        }
        self.products_url()
            .map_err(|err| ConfigError::InvalidValue {
                field: "api_url",
                reason: err.to_string(),
            })?;
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than zero".into(),
            });
        }
        if self.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
