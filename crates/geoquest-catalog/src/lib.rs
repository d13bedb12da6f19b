//! GeoQuest Catalog - Catalog port and adapters
//!
//! This crate defines the port the retrieval pipeline uses to reach the remote
//! metadata catalog, with an HTTP adapter and an in-memory adapter.

pub mod cmr;
pub mod memory;
pub mod ports;

pub use cmr::CmrCatalog;
pub use memory::MemoryCatalog;
pub use ports::CatalogClient;
