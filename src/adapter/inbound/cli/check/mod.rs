//! Configuration validation command handlers.

pub mod config;

pub use config::execute_config;
