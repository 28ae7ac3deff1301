//! Catalog API client module
//!
//! HTTP client for the remote recommendation-service catalog.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::CatalogClient;
pub use types::*;
