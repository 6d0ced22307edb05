//! Source-agnostic domain types.

pub mod error;
mod item;
mod page;
mod price;

pub use error::DomainError;
pub use item::Item;
pub use page::{Page, PriceFilter};
pub use price::{validate_precision, Price, PriceRange, PRICE_EPSILON, PRICE_SCALE};
