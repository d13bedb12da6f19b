use std::sync::Arc;

use chrono::NaiveDateTime;
use geoquest_catalog::ports::CatalogClient;
use geoquest_core::error::Result;
use geoquest_core::models::{
    CatalogEntry, DatasetResult, QueryVocabulary, SearchParameters, TIME_START_MISSING,
};
use geoquest_llm::ports::Assistant;
use geoquest_llm::resilient::ResilientAssistant;

use crate::interpreter::TextQueryInterpreter;
use crate::location::{CoordinateResolutionPipeline, GranuleLocationResolver};
use crate::models::{
    AssistedSearchResult, DirectSearchHit, DirectSearchResult, InterpretedQuery, SearchSettings,
};
use crate::params::ParameterBuilder;

const CATALOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Shorten a catalog timestamp to its date.
///
/// Values in any other format are passed through unchanged.
pub fn normalize_time_start(raw: Option<&str>) -> String {
    let Some(value) = raw else {
        return TIME_START_MISSING.to_string();
    };

    match NaiveDateTime::parse_from_str(value, CATALOG_TIMESTAMP_FORMAT) {
        Ok(timestamp) => timestamp.format("%Y-%m-%d").to_string(),
        Err(_) => {
            tracing::debug!(time_start = value, "Unrecognised time_start format, keeping as is");
            value.to_string()
        }
    }
}

/// Drives catalog searches and prepares their results for display
pub struct CatalogSearchOrchestrator {
    catalog: Arc<dyn CatalogClient>,
    vocabulary: &'static QueryVocabulary,
    settings: SearchSettings,
}

impl CatalogSearchOrchestrator {
    /// Create an orchestrator using the built-in query vocabulary
    pub fn new(catalog: Arc<dyn CatalogClient>, settings: SearchSettings) -> Self {
        Self {
            catalog,
            vocabulary: QueryVocabulary::builtin(),
            settings,
        }
    }

    /// Interpret free text and build the parameters a direct search would send
    pub fn interpret(&self, raw: &str) -> InterpretedQuery {
        let parsed = TextQueryInterpreter::new(self.vocabulary).interpret(raw);
        let params_sent =
            ParameterBuilder::new(self.vocabulary, self.settings.search_page_size).build(&parsed);

        InterpretedQuery {
            raw: raw.to_string(),
            parsed,
            params_sent,
        }
    }

    /// Search with locally interpreted free text.
    ///
    /// Hits carry no coordinates; this is the quick listing path.
    pub async fn direct_search(&self, raw: &str) -> Result<DirectSearchResult> {
        let query = self.interpret(raw);
        tracing::info!(
            raw,
            keyword = %query.parsed.keyword,
            year = ?query.parsed.year,
            region = ?query.parsed.region,
            "Running direct search"
        );

        let entries = self.catalog.search_collections(&query.params_sent).await?;

        let results = entries
            .into_iter()
            .map(|entry| DirectSearchHit {
                link: entry.first_link().map(str::to_string),
                id: entry.id,
                title: entry.title,
                summary: entry.summary,
            })
            .collect();

        Ok(DirectSearchResult { query, results })
    }

    /// Search by an already-extracted keyword string and locate every result.
    ///
    /// Only a failed collection search is an error. Per-dataset problems fall
    /// back to other geometry, a synthetic coordinate, or the raw date.
    pub async fn search(&self, keywords: &str) -> Result<Vec<DatasetResult>> {
        let params = SearchParameters::keyword(keywords, self.settings.enrichment_page_size);
        tracing::info!(keywords, page_size = params.page_size, "Running dataset search");

        let entries = self.catalog.search_collections(&params).await?;
        Ok(self.enrich(&entries).await)
    }

    /// Convert entries to dataset results, preserving their order.
    pub async fn enrich(&self, entries: &[CatalogEntry]) -> Vec<DatasetResult> {
        let pipeline = CoordinateResolutionPipeline::new(GranuleLocationResolver::new(
            self.catalog.as_ref(),
            self.settings.granule_page_size,
        ));

        let mut datasets = Vec::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            let location = pipeline.resolve_for(entry, position).await;
            datasets.push(DatasetResult {
                id: entry.id.clone(),
                title: entry.title.clone(),
                summary: entry.summary.clone(),
                data_center: entry.data_center.clone(),
                time_start: normalize_time_start(entry.time_start.as_deref()),
                coordinate: location.coordinate,
                link: entry.first_link().map(str::to_string),
            });
        }
        datasets
    }

    /// Fetch and locate a single collection by concept id
    pub async fn dataset(&self, concept_id: &str) -> Result<Option<DatasetResult>> {
        let Some(entry) = self.catalog.get_collection(concept_id).await? else {
            return Ok(None);
        };
        Ok(self.enrich(std::slice::from_ref(&entry)).await.into_iter().next())
    }

    /// Let the assistant pick keywords, search with them, then summarise.
    pub async fn assisted_search<A: Assistant + ?Sized>(
        &self,
        assistant: &ResilientAssistant<A>,
        raw: &str,
    ) -> Result<AssistedSearchResult> {
        let extracted_keywords = assistant.keywords_or_original(raw).await;
        tracing::info!(raw, keywords = %extracted_keywords, "Assistant extracted keywords");

        let datasets = self.search(&extracted_keywords).await?;
        let summary = assistant.summary_or_none(&datasets).await;

        Ok(AssistedSearchResult {
            original_query: raw.to_string(),
            extracted_keywords,
            datasets,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoquest_catalog::MemoryCatalog;
    use geoquest_core::error::GeoquestError;
    use geoquest_core::models::Coordinate;
    use serde_json::json;

    fn orchestrator(catalog: &MemoryCatalog) -> CatalogSearchOrchestrator {
        CatalogSearchOrchestrator::new(Arc::new(catalog.clone()), SearchSettings::default())
    }

    #[test]
    fn test_normalize_time_start() {
        assert_eq!(normalize_time_start(Some("2000-02-24T00:00:00Z")), "2000-02-24");
        assert_eq!(normalize_time_start(Some("2000-02-24T00:00:00.000Z")), "2000-02-24T00:00:00.000Z");
        assert_eq!(normalize_time_start(Some("sometime")), "sometime");
        assert_eq!(normalize_time_start(None), "N/A");
    }

    #[test]
    fn test_interpret_uses_search_page_size() {
        let catalog = MemoryCatalog::new();
        let query = orchestrator(&catalog).interpret("Flood India 2020");
        assert_eq!(query.params_sent.page_size, 10);
        assert_eq!(query.params_sent.bounding_box.as_deref(), Some("68,6,97,36"));
        assert_eq!(query.raw, "Flood India 2020");
    }

    #[tokio::test]
    async fn test_search_uses_enrichment_page_size() {
        let catalog = MemoryCatalog::new();
        orchestrator(&catalog).search("volcanic ash").await.unwrap();

        let sent = catalog.recorded_searches();
        assert_eq!(sent, vec![SearchParameters::keyword("volcanic ash", 20)]);
    }

    #[tokio::test]
    async fn test_end_to_end_box_midpoint() {
        let catalog = MemoryCatalog::with_collections(vec![CatalogEntry {
            title: Some("Flood extent".to_string()),
            boxes: Some(json!(["10,20,30,40"])),
            ..Default::default()
        }]);

        let results = orchestrator(&catalog).search("flood").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].coordinate, Coordinate::new(20.0, 30.0));
        assert_eq!(results[0].time_start, "N/A");
    }

    #[tokio::test]
    async fn test_dataset_lookup() {
        let catalog = MemoryCatalog::with_collections(vec![CatalogEntry {
            id: Some("C7".to_string()),
            time_start: Some("2015-06-01T00:00:00Z".to_string()),
            ..Default::default()
        }]);
        let orchestrator = orchestrator(&catalog);

        let found = orchestrator.dataset("C7").await.unwrap().unwrap();
        assert_eq!(found.time_start, "2015-06-01");
        assert_eq!(found.coordinate, Coordinate::new(0.0, 0.0));
        assert!(orchestrator.dataset("C8").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_catalog_failure_aborts() {
        let catalog = MemoryCatalog::with_collections(vec![CatalogEntry::default()]);
        catalog.set_unavailable(true);

        let err = orchestrator(&catalog).search("flood").await.unwrap_err();
        assert!(matches!(err, GeoquestError::CatalogUnavailable { .. }));
    }
}
