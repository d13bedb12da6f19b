use geoquest_core::config::LayeredConfig;
use geoquest_core::models::{DatasetResult, DatasetSummary, ParsedQuery, SearchParameters};
use serde::{Deserialize, Serialize};

/// Page sizes used by the different search paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    /// Page size for direct (interpreted) searches
    pub search_page_size: usize,

    /// Page size for keyword searches whose results get coordinates
    pub enrichment_page_size: usize,

    /// Granules requested per collection during location lookup
    pub granule_page_size: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            search_page_size: 10,
            enrichment_page_size: 20,
            granule_page_size: 5,
        }
    }
}

impl SearchSettings {
    pub fn from_config(config: &LayeredConfig) -> Self {
        Self {
            search_page_size: config.search_page_size.value,
            enrichment_page_size: config.enrichment_page_size.value,
            granule_page_size: config.granule_page_size.value,
        }
    }
}

/// A raw query alongside its interpretation and the parameters sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretedQuery {
    pub raw: String,

    #[serde(flatten)]
    pub parsed: ParsedQuery,

    pub params_sent: SearchParameters,
}

/// One collection returned by a direct search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectSearchHit {
    pub id: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub link: Option<String>,
}

/// Result of searching with locally interpreted free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectSearchResult {
    pub query: InterpretedQuery,
    pub results: Vec<DirectSearchHit>,
}

/// Result of an assistant-mediated search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistedSearchResult {
    pub original_query: String,

    pub extracted_keywords: String,

    pub datasets: Vec<DatasetResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<DatasetSummary>,
}
