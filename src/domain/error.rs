//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors that validate inputs.
//!
//! # Examples
//!
//! ```
//! use pricesweep::domain::{DomainError, PriceRange};
//! use rust_decimal_macros::dec;
//!
//! let result = PriceRange::try_new(dec!(10), dec!(1));
//! assert!(matches!(result, Err(DomainError::InvertedRange { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Range lower bound exceeds its upper bound.
    #[error("price range minimum {min} exceeds maximum {max}")]
    InvertedRange {
        /// The lower bound that was provided.
        min: Decimal,
        /// The upper bound that was provided.
        max: Decimal,
    },

    /// A price carries more fractional digits than bisection can resolve.
    #[error("price {value} has more than {max_scale} decimal places")]
    ExcessPrecision {
        /// The offending value.
        value: Decimal,
        /// Maximum supported number of fractional digits.
        max_scale: u32,
    },

    /// Window step must be at least one price increment.
    #[error("step size must be positive, got {step}")]
    NonPositiveStep {
        /// The invalid step that was provided.
        step: Decimal,
    },
}
