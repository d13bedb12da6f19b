//! In-memory catalog for development and testing.
//!
//! This implementation uses `RwLock::unwrap()` intentionally. Lock poisoning
//! only occurs when another thread panicked while holding the lock, which is
//! an unrecoverable state.

use async_trait::async_trait;
use geoquest_core::error::{GeoquestError, Result};
use geoquest_core::models::{CatalogEntry, SearchParameters};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::ports::CatalogClient;

const MEMORY_ENDPOINT: &str = "memory://catalog";

/// In-memory implementation of CatalogClient
///
/// Collection searches return the stored collections in insertion order,
/// truncated to the requested page size. Every request is recorded so tests
/// can inspect what the pipeline sent.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    collections: Arc<RwLock<Vec<CatalogEntry>>>,
    granules: Arc<RwLock<HashMap<String, Vec<CatalogEntry>>>>,
    failing_granules: Arc<RwLock<HashSet<String>>>,
    unavailable: Arc<RwLock<bool>>,
    searches: Arc<RwLock<Vec<SearchParameters>>>,
    granule_requests: Arc<RwLock<Vec<(String, usize)>>>,
}

impl MemoryCatalog {
    /// Create an empty in-memory catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the given collections
    pub fn with_collections(collections: Vec<CatalogEntry>) -> Self {
        let catalog = Self::new();
        *catalog.collections.write().unwrap() = collections;
        catalog
    }

    /// Register granules returned for a collection id
    pub fn add_granules(&self, collection_id: impl Into<String>, granules: Vec<CatalogEntry>) {
        self.granules.write().unwrap().entry(collection_id.into()).or_default().extend(granules);
    }

    /// Make granule searches for this collection fail
    pub fn fail_granules_for(&self, collection_id: impl Into<String>) {
        self.failing_granules.write().unwrap().insert(collection_id.into());
    }

    /// Make every request fail as if the catalog were down
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write().unwrap() = unavailable;
    }

    /// Parameters of every collection search so far
    pub fn recorded_searches(&self) -> Vec<SearchParameters> {
        self.searches.read().unwrap().clone()
    }

    /// `(collection_id, page_size)` of every granule search so far
    pub fn granule_requests(&self) -> Vec<(String, usize)> {
        self.granule_requests.read().unwrap().clone()
    }

    fn check_available(&self) -> Result<()> {
        if *self.unavailable.read().unwrap() {
            return Err(GeoquestError::catalog(MEMORY_ENDPOINT, "catalog marked unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogClient for MemoryCatalog {
    async fn search_collections(&self, params: &SearchParameters) -> Result<Vec<CatalogEntry>> {
        self.searches.write().unwrap().push(params.clone());
        self.check_available()?;

        let collections = self.collections.read().unwrap();
        Ok(collections.iter().take(params.page_size).cloned().collect())
    }

    async fn search_granules(
        &self,
        collection_id: &str,
        page_size: usize,
    ) -> Result<Vec<CatalogEntry>> {
        self.granule_requests.write().unwrap().push((collection_id.to_string(), page_size));
        self.check_available()?;

        if self.failing_granules.read().unwrap().contains(collection_id) {
            return Err(GeoquestError::catalog(
                MEMORY_ENDPOINT,
                format!("granule search failed for {}", collection_id),
            ));
        }

        let granules = self.granules.read().unwrap();
        Ok(granules
            .get(collection_id)
            .map(|g| g.iter().take(page_size).cloned().collect())
            .unwrap_or_default())
    }

    async fn get_collection(&self, concept_id: &str) -> Result<Option<CatalogEntry>> {
        self.check_available()?;

        let collections = self.collections.read().unwrap();
        Ok(collections.iter().find(|c| c.id.as_deref() == Some(concept_id)).cloned())
    }
}
