//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`catalog`] - In-memory [`RangeFetcher`](crate::port::RangeFetcher)
//!   implementations: `SimulatedCatalog`, `ScriptedFetcher`.
//! - [`domain`] - Builders for prices and items, plus id extraction.

pub mod catalog;
pub mod domain;
