use async_trait::async_trait;
use geoquest_core::error::Result;
use geoquest_core::models::{CatalogEntry, SearchParameters};

/// Port for the remote metadata catalog
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Search collections; entries come back in catalog order
    async fn search_collections(&self, params: &SearchParameters) -> Result<Vec<CatalogEntry>>;

    /// Search the granules belonging to one collection
    async fn search_granules(
        &self,
        collection_id: &str,
        page_size: usize,
    ) -> Result<Vec<CatalogEntry>>;

    /// Fetch a single collection by its concept id
    async fn get_collection(&self, concept_id: &str) -> Result<Option<CatalogEntry>>;
}
