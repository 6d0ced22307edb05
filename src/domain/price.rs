//! Price ranges and the fixed-precision arithmetic the scan relies on.
//!
//! Every price the catalog filters on is assumed to carry at most
//! [`PRICE_SCALE`] fractional digits. Under that assumption the range
//! `[min, mid - PRICE_EPSILON]` and `[mid, max]` partition `[min, max]`
//! with no overlap and no gap, which is what makes bisection exact.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Number of fractional digits a price may carry.
pub const PRICE_SCALE: u32 = 3;

/// Smallest representable price increment at [`PRICE_SCALE`] (0.001).
pub const PRICE_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, PRICE_SCALE);

/// Check that `value` fits within [`PRICE_SCALE`] fractional digits.
///
/// Trailing zeros are ignored, so `1.5000` is accepted.
pub fn validate_precision(value: Price) -> Result<Price, DomainError> {
    let normalized = value.normalize();
    if normalized.scale() > PRICE_SCALE {
        return Err(DomainError::ExcessPrecision {
            value,
            max_scale: PRICE_SCALE,
        });
    }
    Ok(normalized)
}

/// An inclusive price interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    min: Price,
    max: Price,
}

impl PriceRange {
    /// Create a validated range.
    ///
    /// Fails when `min > max` or when either bound has more than
    /// [`PRICE_SCALE`] fractional digits.
    pub fn try_new(min: Price, max: Price) -> Result<Self, DomainError> {
        let min = validate_precision(min)?;
        let max = validate_precision(max)?;
        if min > max {
            return Err(DomainError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn min(&self) -> Price {
        self.min
    }

    /// Inclusive upper bound.
    #[must_use]
    pub const fn max(&self) -> Price {
        self.max
    }

    /// Whether `price` falls inside the range.
    #[must_use]
    pub fn contains(&self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }

    /// Midpoint rounded to [`PRICE_SCALE`] digits, halves away from zero.
    #[must_use]
    pub fn midpoint(&self) -> Price {
        let half = (self.max - self.min) / Decimal::TWO;
        (self.min + half)
            .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
    }

    /// Split into `[min, mid - ε]` and `[mid, max]`.
    ///
    /// Returns `None` when the midpoint collapses onto `min`, meaning the
    /// range cannot be narrowed any further at [`PRICE_SCALE`].
    #[must_use]
    pub fn bisect(&self) -> Option<(Self, Self)> {
        let mid = self.midpoint();
        if mid == self.min {
            return None;
        }
        let lower = Self {
            min: self.min,
            max: (mid - PRICE_EPSILON).normalize(),
        };
        let upper = Self {
            min: mid,
            max: self.max,
        };
        Some((lower, upper))
    }

    /// Window of width `step` starting at `start`, closed at `start + step - ε`.
    ///
    /// Consecutive windows produced with the same step never share a price.
    pub fn window(start: Price, step: Price) -> Result<Self, DomainError> {
        let step = validate_precision(step)?;
        if step < PRICE_EPSILON {
            return Err(DomainError::NonPositiveStep { step });
        }
        Self::try_new(start, start + step - PRICE_EPSILON)
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
