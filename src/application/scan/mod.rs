//! Exhaustive catalog scanning over page-capped range queries.
//!
//! - [`RangePartitioner`] bisects a range that overflowed the page cap.
//! - [`ScanOrchestrator`] runs the ascending and descending strategies.
//! - [`ScanState`] is the orchestrator's progress snapshot.

mod config;
mod orchestrator;
mod partitioner;
mod state;

pub use config::ScanConfig;
pub use orchestrator::ScanOrchestrator;
pub use partitioner::{PartitionStats, RangePartitioner};
pub use state::{InitOptions, ScanPhase, ScanState, ScanStrategy};
