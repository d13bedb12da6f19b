pub mod catalog;
pub mod dataset;
pub mod query;
pub mod vocabulary;

pub use catalog::{CatalogEntry, CatalogFeed, CatalogLink};
pub use dataset::{Coordinate, DatasetResult, DatasetSummary, Recommendation, TIME_START_MISSING};
pub use query::{ParsedQuery, SearchParameters};
pub use vocabulary::{NamedRegion, QueryVocabulary};
