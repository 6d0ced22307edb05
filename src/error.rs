use thiserror::Error;

use crate::application::scan::ScanPhase;
use crate::domain::error::DomainError;
use crate::domain::PriceRange;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures of the range fetch collaborator. Never retried by the scan.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog returned status {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("catalog response from {url} has no data")]
    EmptyPayload { url: String },

    #[error("failed to decode catalog response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("inconsistent page: count {count} but {items} items (total {total})")]
    InconsistentPage { total: u64, count: u64, items: usize },

    #[error("invalid catalog URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Failures of the scan itself. Each one aborts the whole scan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// More items share one price than a single page can return.
    #[error(
        "range {range} cannot be subdivided further: more items share a single price than the catalog returns per page"
    )]
    Exhausted { range: PriceRange },

    /// An ascending window came back empty before the reported total was reached.
    #[error("ascending scan stalled at window {window}: collected {collected} of {target} items")]
    Incomplete {
        window: PriceRange,
        collected: usize,
        target: u64,
    },

    #[error("scan finished in phase {phase}; call initialize() before scanning again")]
    NotInitialized { phase: ScanPhase },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Fetch(FetchError::Http(err))
    }
}
