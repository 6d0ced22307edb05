//! Pricesweep - exhaustive retrieval from page-capped catalog APIs.
//!
//! Some catalogs only let a client filter by an inclusive price range and
//! cap how many items a single response may carry, reporting just the
//! number of matches and the number returned. This crate recovers the full
//! catalog anyway, with no duplicates and no gaps, by narrowing price
//! ranges until every range fits in one page.
//!
//! # Architecture
//!
//! - **`application::scan`** - The scan core
//!   - `RangePartitioner` - Bisects ranges that overflow the page cap
//!   - `ScanOrchestrator` - Ascending (fixed-step) and descending
//!     (full-domain-first) strategies over an explicit `ScanState`
//!
//! - **`port`** - The `RangeFetcher` trait the core depends on
//! - **`adapter`** - HTTP catalog client and the command-line interface
//!
//! # Modules
//!
//! - [`domain`] - Price ranges, pages, and opaque items
//! - [`port`] - Outbound fetch port
//! - [`application`] - Scan partitioning and orchestration
//! - [`adapter`] - HTTP catalog adapter and CLI
//! - [`infrastructure`] - Configuration loading and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use pricesweep::adapter::outbound::catalog::{CatalogClient, CatalogConfig};
//! use pricesweep::application::scan::{InitOptions, ScanConfig, ScanOrchestrator};
//!
//! # async fn run() -> pricesweep::error::Result<()> {
//! let client = CatalogClient::from_config(&CatalogConfig::default())?;
//! let mut orchestrator = ScanOrchestrator::new(client, ScanConfig::default())?;
//! let items = orchestrator
//!     .initialize(InitOptions::default())?
//!     .scan_ascending()
//!     .await?
//!     .items()
//!     .len();
//! println!("{items} items");
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
