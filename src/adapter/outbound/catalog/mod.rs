//! Catalog REST API integration.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::CatalogClient;
pub use settings::CatalogConfig;
