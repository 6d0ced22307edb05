//! Scan configuration.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{validate_precision, PriceRange};
use crate::error::ConfigError;

/// Bounds and stepping policy shared by both scan strategies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScanConfig {
    /// Width of each ascending window.
    #[serde(default = "default_step_size")]
    pub step_size: Decimal,

    /// Lowest price either strategy starts from.
    #[serde(default = "default_domain_min")]
    pub domain_min: Decimal,

    /// Highest price the descending strategy covers.
    #[serde(default = "default_domain_max")]
    pub domain_max: Decimal,
}

fn default_step_size() -> Decimal {
    Decimal::from(200)
}

fn default_domain_min() -> Decimal {
    Decimal::ZERO
}

fn default_domain_max() -> Decimal {
    Decimal::from(100_000)
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            step_size: default_step_size(),
            domain_min: default_domain_min(),
            domain_max: default_domain_max(),
        }
    }
}

impl ScanConfig {
    /// The full `[domain_min, domain_max]` range.
    pub fn domain(&self) -> Result<PriceRange, ConfigError> {
        PriceRange::try_new(self.domain_min, self.domain_max).map_err(|err| {
            ConfigError::InvalidValue {
                field: "domain_max",
                reason: err.to_string(),
            }
        })
    }

    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("step_size", self.step_size),
            ("domain_min", self.domain_min),
            ("domain_max", self.domain_max),
        ] {
            validate_precision(value).map_err(|err| ConfigError::InvalidValue {
                field,
                reason: err.to_string(),
            })?;
        }

        if self.step_size <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "step_size",
                reason: format!("must be positive, got {}", self.step_size),
            });
        }
        if self.domain_min < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "domain_min",
                reason: format!("must not be negative, got {}", self.domain_min),
            });
        }

        self.domain().map(|_| ())
    }
}
