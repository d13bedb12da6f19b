use std::time::Duration;

use async_trait::async_trait;
use geoquest_core::config::LayeredConfig;
use geoquest_core::error::{GeoquestError, Result};
use geoquest_core::models::{CatalogEntry, CatalogFeed, SearchParameters};
use reqwest::header::ACCEPT;
use reqwest::Url;

use crate::ports::CatalogClient;

/// HTTP adapter for a CMR-style JSON search API
///
/// Every call is a single attempt bounded by a timeout. Timeouts, transport
/// errors, non-2xx statuses and unreadable bodies all surface as
/// [`GeoquestError::CatalogUnavailable`].
pub struct CmrCatalog {
    collections_url: String,
    granules_url: String,
    collection_timeout: Duration,
    granule_timeout: Duration,
    client: reqwest::Client,
}

impl CmrCatalog {
    pub fn new(collections_url: impl Into<String>, granules_url: impl Into<String>) -> Self {
        Self {
            collections_url: collections_url.into(),
            granules_url: granules_url.into(),
            collection_timeout: Duration::from_secs(20),
            granule_timeout: Duration::from_secs(15),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &LayeredConfig) -> Self {
        Self::new(config.collections_url.value.clone(), config.granules_url.value.clone())
            .with_timeouts(config.collection_timeout(), config.granule_timeout())
    }

    pub fn with_timeouts(mut self, collection: Duration, granule: Duration) -> Self {
        self.collection_timeout = collection;
        self.granule_timeout = granule;
        self
    }

    fn build_url(base: &str, pairs: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(base).map_err(|e| GeoquestError::ConfigInvalid {
            key: "catalog url".to_string(),
            reason: format!("'{}' is not a valid URL: {}", base, e),
        })?;

        {
            let mut query = url.query_pairs_mut();
            for (name, value) in pairs {
                query.append_pair(name, value);
            }
        }

        Ok(url)
    }

    async fn fetch_entries(
        &self,
        endpoint: &str,
        pairs: &[(&str, String)],
        timeout: Duration,
    ) -> Result<Vec<CatalogEntry>> {
        let url = Self::build_url(endpoint, pairs)?;
        tracing::debug!(%url, timeout_secs = timeout.as_secs(), "Querying catalog");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                let reason = if e.is_timeout() {
                    format!("request timed out after {}s", timeout.as_secs())
                } else {
                    format!("request failed: {}", e)
                };
                GeoquestError::catalog(endpoint, reason)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeoquestError::catalog(
                endpoint,
                format!("HTTP {}: {}", status, error_text.trim()),
            ));
        }

        let feed: CatalogFeed = response
            .json()
            .await
            .map_err(|e| GeoquestError::catalog(endpoint, format!("malformed response: {}", e)))?;

        Ok(feed.into_entries())
    }
}

#[async_trait]
impl CatalogClient for CmrCatalog {
    async fn search_collections(&self, params: &SearchParameters) -> Result<Vec<CatalogEntry>> {
        let entries = self
            .fetch_entries(&self.collections_url, &params.query_pairs(), self.collection_timeout)
            .await?;

        tracing::info!(
            keyword = %params.keyword,
            page_size = params.page_size,
            returned = entries.len(),
            "Collection search complete"
        );
        Ok(entries)
    }

    async fn search_granules(
        &self,
        collection_id: &str,
        page_size: usize,
    ) -> Result<Vec<CatalogEntry>> {
        let pairs = [
            ("collection_concept_id", collection_id.to_string()),
            ("page_size", page_size.to_string()),
        ];
        self.fetch_entries(&self.granules_url, &pairs, self.granule_timeout).await
    }

    async fn get_collection(&self, concept_id: &str) -> Result<Option<CatalogEntry>> {
        let pairs = [("concept_id", concept_id.to_string()), ("page_size", "1".to_string())];
        let entries =
            self.fetch_entries(&self.collections_url, &pairs, self.collection_timeout).await?;
        Ok(entries.into_iter().next())
    }
}
