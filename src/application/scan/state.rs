//! Scan progress as an explicit, replace-per-step value.

use std::fmt;

use rust_decimal::Decimal;

use crate::domain::{validate_precision, Item, Price};
use crate::error::{ConfigError, Result};

/// Lifecycle of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanPhase {
    Uninitialized,
    Initialized,
    Scanning,
    Done,
    Failed,
}

impl ScanPhase {
    /// Stable name used in logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Initialized => "initialized",
            Self::Scanning => "scanning",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }

    /// A scan ended, successfully or not.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for ScanPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level scan strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanStrategy {
    /// Fixed-width windows from the domain minimum until the reported total is reached.
    Ascending,
    /// One probe over the whole domain, bisected on overflow.
    Descending,
}

impl fmt::Display for ScanStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
        }
    }
}

/// Options accepted by `initialize`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitOptions {
    /// Overrides the configured ascending step size.
    pub step_size: Option<Decimal>,
}

impl InitOptions {
    #[must_use]
    pub const fn with_step_size(step_size: Decimal) -> Self {
        Self {
            step_size: Some(step_size),
        }
    }
}

/// Snapshot of one orchestrator's scan.
///
/// Transitions consume the current state and return the next one, so a
/// state is never observed half-updated.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanState {
    accumulated: Vec<Item>,
    cursor: Price,
    step_size: Price,
    strategy: Option<ScanStrategy>,
    phase: ScanPhase,
    reported_total: Option<u64>,
    windows: usize,
}

impl ScanState {
    /// State of an orchestrator that has never been initialized.
    #[must_use]
    pub const fn uninitialized(domain_min: Price, step_size: Price) -> Self {
        Self {
            accumulated: Vec::new(),
            cursor: domain_min,
            step_size,
            strategy: None,
            phase: ScanPhase::Uninitialized,
            reported_total: None,
            windows: 0,
        }
    }

    /// Fresh state ready for a scan. Rejects non-positive or over-precise steps.
    pub fn initialized(domain_min: Price, step_size: Price) -> Result<Self> {
        let step_size = validate_precision(step_size)?;
        if step_size <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "step_size",
                reason: format!("must be positive, got {step_size}"),
            }
            .into());
        }
        Ok(Self {
            phase: ScanPhase::Initialized,
            ..Self::uninitialized(domain_min, step_size)
        })
    }

    #[must_use]
    pub(crate) fn begin(self, strategy: ScanStrategy) -> Self {
        Self {
            strategy: Some(strategy),
            phase: ScanPhase::Scanning,
            ..self
        }
    }

    #[must_use]
    pub(crate) fn complete(
        self,
        accumulated: Vec<Item>,
        cursor: Price,
        reported_total: u64,
        windows: usize,
    ) -> Self {
        Self {
            accumulated,
            cursor,
            phase: ScanPhase::Done,
            reported_total: Some(reported_total),
            windows,
            ..self
        }
    }

    /// Failed scans keep no items.
    #[must_use]
    pub(crate) fn fail(self) -> Self {
        Self {
            accumulated: Vec::new(),
            phase: ScanPhase::Failed,
            ..self
        }
    }

    /// Items collected so far, in discovery order.
    #[must_use]
    pub fn accumulated(&self) -> &[Item] {
        &self.accumulated
    }

    pub(crate) fn take_accumulated(self) -> Vec<Item> {
        self.accumulated
    }

    /// Start of the next ascending window.
    #[must_use]
    pub const fn cursor(&self) -> Price {
        self.cursor
    }

    #[must_use]
    pub const fn step_size(&self) -> Price {
        self.step_size
    }

    #[must_use]
    pub const fn strategy(&self) -> Option<ScanStrategy> {
        self.strategy
    }

    #[must_use]
    pub const fn phase(&self) -> ScanPhase {
        self.phase
    }

    /// Total the source reported for the scanned range, once known.
    #[must_use]
    pub const fn reported_total(&self) -> Option<u64> {
        self.reported_total
    }

    /// Top-level windows fetched by the last scan, excluding the probe.
    #[must_use]
    pub const fn windows(&self) -> usize {
        self.windows
    }
}
