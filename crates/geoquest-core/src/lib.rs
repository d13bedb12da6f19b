//! GeoQuest Core - Domain models, query vocabulary, and configuration
//!
//! This crate contains the domain types shared by the catalog adapters, the
//! assistant adapters, and the retrieval pipeline.

pub mod config;
pub mod error;
pub mod models;

pub use error::{validate_query, GeoquestError, Result};
