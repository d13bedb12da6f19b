//! GeoQuest Retrieval - Query interpretation and dataset geolocation
//!
//! This crate turns free text into catalog search parameters, runs the
//! search, and gives every returned dataset a coordinate to plot.

pub mod interpreter;
pub mod location;
pub mod models;
pub mod params;
pub mod pipeline;

pub use interpreter::TextQueryInterpreter;
pub use location::{
    CoordinateResolutionPipeline, GranuleLocationResolver, LocationSource, ResolvedLocation,
};
pub use models::{
    AssistedSearchResult, DirectSearchHit, DirectSearchResult, InterpretedQuery, SearchSettings,
};
pub use params::{build_temporal, ParameterBuilder};
pub use pipeline::CatalogSearchOrchestrator;
