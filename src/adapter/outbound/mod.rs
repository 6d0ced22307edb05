//! Outbound adapters (driven side).

pub mod catalog;
