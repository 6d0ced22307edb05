//! One page of results for a bounded query.

use rust_decimal::Decimal;

use super::{Item, PriceRange};

/// Price bounds sent with a fetch. `None` leaves that side unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceFilter {
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
}

impl PriceFilter {
    /// Filter that matches the whole catalog.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Whether either side is bounded.
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Whether `price` passes the filter.
    #[must_use]
    pub fn matches(&self, price: Decimal) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

impl From<PriceRange> for PriceFilter {
    fn from(range: PriceRange) -> Self {
        Self {
            min: Some(range.min()),
            max: Some(range.max()),
        }
    }
}

impl std::fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "[{min}, {max}]"),
            (Some(min), None) => write!(f, "[{min}, *)"),
            (None, Some(max)) => write!(f, "(*, {max}]"),
            (None, None) => write!(f, "(*, *)"),
        }
    }
}

/// Result of a single bounded query.
///
/// `total` is the number of matching items the source knows about, `count`
/// the number it actually returned. Adapters guarantee
/// `count == items.len()` and `count <= total`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub total: u64,
    pub count: u64,
    pub items: Vec<Item>,
}

impl Page {
    /// Build a page whose count matches its items.
    #[must_use]
    pub fn new(total: u64, items: Vec<Item>) -> Self {
        Self {
            total,
            count: items.len() as u64,
            items,
        }
    }

    /// The source held back items: the range needs narrowing.
    #[must_use]
    pub const fn overflows(&self) -> bool {
        self.count < self.total
    }

    /// Whether the query matched nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}
