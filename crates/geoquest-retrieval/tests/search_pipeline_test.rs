//! Integration tests for the search pipeline against an in-memory catalog

use std::sync::Arc;

use async_trait::async_trait;
use geoquest_catalog::MemoryCatalog;
use geoquest_core::error::{GeoquestError, Result};
use geoquest_core::models::{
    CatalogEntry, CatalogFeed, Coordinate, DatasetResult, DatasetSummary, Recommendation,
};
use geoquest_llm::{Assistant, DisabledAssistant, ResilientAssistant};
use geoquest_retrieval::{CatalogSearchOrchestrator, SearchSettings};
use serde_json::json;

fn fixture_entries() -> Vec<CatalogEntry> {
    let feed: CatalogFeed =
        serde_json::from_str(include_str!("fixtures/collections_flood.json")).unwrap();
    feed.into_entries()
}

fn granule(boxes: serde_json::Value) -> CatalogEntry {
    CatalogEntry {
        id: Some("G-1".to_string()),
        boxes: Some(boxes),
        ..Default::default()
    }
}

fn orchestrator(catalog: &MemoryCatalog) -> CatalogSearchOrchestrator {
    CatalogSearchOrchestrator::new(Arc::new(catalog.clone()), SearchSettings::default())
}

#[tokio::test]
async fn test_fixture_search_resolves_every_dataset() {
    let catalog = MemoryCatalog::with_collections(fixture_entries());
    catalog.add_granules("C1000000030-ORNL_CLOUD", vec![granule(json!(["10 76 10.5 76.5"]))]);

    let results = orchestrator(&catalog).search("flood").await.unwrap();
    assert_eq!(results.len(), 4);

    // Collection box midpoint
    assert_eq!(results[0].id.as_deref(), Some("C1000000010-LANCEMODIS"));
    assert_eq!(results[0].coordinate, Coordinate::new(0.0, 0.0));
    assert_eq!(results[0].time_start, "2021-01-01");
    assert_eq!(
        results[0].link.as_deref(),
        Some("https://nrt3.modaps.eosdis.nasa.gov/archive/allData/61/MCDWD_L3_NRT")
    );

    // Collection polygon first point; fractional timestamp passes through
    assert_eq!(results[1].coordinate, Coordinate::new(-60.0, -180.0));
    assert_eq!(results[1].time_start, "2000-06-01T00:00:00.000Z");
    assert_eq!(results[1].link, None);

    // Granule geometry overrides the collection box
    assert_eq!(results[2].coordinate, Coordinate::new(10.25, 76.25));
    assert_eq!(results[2].data_center.as_deref(), Some("ORNL_CLOUD"));

    // No geometry and no id: synthetic placement by position
    assert_eq!(results[3].id, None);
    assert_eq!(results[3].coordinate, Coordinate::new(30.0, 60.0));
    assert_eq!(results[3].time_start, "N/A");
}

#[tokio::test]
async fn test_granule_lookups_use_granule_page_size() {
    let catalog = MemoryCatalog::with_collections(fixture_entries());
    orchestrator(&catalog).search("flood").await.unwrap();

    let requests = catalog.granule_requests();
    assert_eq!(requests.len(), 3);
    assert!(requests.iter().all(|(_, page_size)| *page_size == 5));
    assert_eq!(requests[0].0, "C1000000010-LANCEMODIS");
}

#[tokio::test]
async fn test_granule_failure_keeps_collection_location() {
    let catalog = MemoryCatalog::with_collections(fixture_entries());
    catalog.fail_granules_for("C1000000030-ORNL_CLOUD");

    let results = orchestrator(&catalog).search("flood").await.unwrap();
    assert_eq!(results[2].coordinate, Coordinate::new(10.5, 76.1));
}

#[tokio::test]
async fn test_repeated_search_is_identical() {
    let catalog = MemoryCatalog::with_collections(fixture_entries());
    let orchestrator = orchestrator(&catalog);

    let first = orchestrator.search("flood").await.unwrap();
    let second = orchestrator.search("flood").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_order_is_preserved() {
    let entries: Vec<CatalogEntry> = (0..12)
        .map(|i| CatalogEntry {
            title: Some(format!("dataset {}", i)),
            ..Default::default()
        })
        .collect();
    let catalog = MemoryCatalog::with_collections(entries);

    let results = orchestrator(&catalog).search("storm").await.unwrap();
    let titles: Vec<String> = results.iter().map(|r| r.title.clone().unwrap()).collect();
    let expected: Vec<String> = (0..12).map(|i| format!("dataset {}", i)).collect();
    assert_eq!(titles, expected);
    assert_eq!(results[11].coordinate, Coordinate::new(20.0, 40.0));
}

#[tokio::test]
async fn test_direct_search_sends_interpreted_parameters() {
    let catalog = MemoryCatalog::with_collections(fixture_entries());

    let result = orchestrator(&catalog).direct_search("Flood near India 2020").await.unwrap();

    assert_eq!(result.query.parsed.keyword, "flood");
    assert_eq!(result.query.parsed.year.as_deref(), Some("2020"));
    assert_eq!(result.query.parsed.region.as_deref(), Some("india"));
    assert_eq!(catalog.recorded_searches(), vec![result.query.params_sent.clone()]);
    assert_eq!(result.query.params_sent.page_size, 10);
    assert_eq!(
        result.query.params_sent.temporal.as_deref(),
        Some("2020-01-01T00:00:00Z,2020-12-31T23:59:59Z")
    );
    assert_eq!(result.query.params_sent.bounding_box.as_deref(), Some("68,6,97,36"));

    assert_eq!(result.results.len(), 4);
    assert_eq!(result.results[0].title.as_deref(), Some("MODIS/Aqua+Terra Global Flood Product L3 NRT 250m 2-Day"));
    assert!(result.results[0].link.is_some());
    // Direct search never looks up granules
    assert!(catalog.granule_requests().is_empty());
}

#[tokio::test]
async fn test_direct_search_unavailable_catalog() {
    let catalog = MemoryCatalog::new();
    catalog.set_unavailable(true);

    let err = orchestrator(&catalog).direct_search("volcano").await.unwrap_err();
    assert!(matches!(err, GeoquestError::CatalogUnavailable { .. }));
}

struct ScriptedAssistant;

#[async_trait]
impl Assistant for ScriptedAssistant {
    async fn extract_keywords(&self, _text: &str) -> Result<String> {
        Ok("flood inundation".to_string())
    }

    async fn summarize(&self, datasets: &[DatasetResult]) -> Result<DatasetSummary> {
        Ok(DatasetSummary {
            overview: format!("{} datasets", datasets.len()),
            recommendations: vec![Recommendation {
                id: datasets[0].id.clone().unwrap_or_default(),
                reason: "global coverage".to_string(),
            }],
        })
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

#[tokio::test]
async fn test_assisted_search_uses_extracted_keywords() {
    let catalog = MemoryCatalog::with_collections(fixture_entries());
    let assistant = ResilientAssistant::new(Box::new(ScriptedAssistant));

    let result = orchestrator(&catalog)
        .assisted_search(&assistant, "What flooded in Kerala in 2018?")
        .await
        .unwrap();

    assert_eq!(result.original_query, "What flooded in Kerala in 2018?");
    assert_eq!(result.extracted_keywords, "flood inundation");
    assert_eq!(catalog.recorded_searches()[0].keyword, "flood inundation");
    assert_eq!(catalog.recorded_searches()[0].page_size, 20);
    assert_eq!(result.datasets.len(), 4);

    let summary = result.summary.unwrap();
    assert_eq!(summary.overview, "4 datasets");
    assert_eq!(summary.recommendations[0].id, "C1000000010-LANCEMODIS");
}

#[tokio::test]
async fn test_assisted_search_without_assistant() {
    let catalog = MemoryCatalog::with_collections(fixture_entries());
    let assistant = ResilientAssistant::new(Box::new(DisabledAssistant));

    let result = orchestrator(&catalog).assisted_search(&assistant, "ash cloud").await.unwrap();

    assert_eq!(result.extracted_keywords, "ash cloud");
    assert!(result.summary.is_none());
    assert_eq!(result.datasets.len(), 4);
}
