use std::sync::Arc;

use geoquest_catalog::ports::CatalogClient;
use geoquest_llm::ports::Assistant;
use geoquest_llm::resilient::ResilientAssistant;
use geoquest_retrieval::{CatalogSearchOrchestrator, SearchSettings};

pub struct AppState {
    pub orchestrator: CatalogSearchOrchestrator,
    pub assistant: ResilientAssistant<dyn Assistant>,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn CatalogClient>,
        settings: SearchSettings,
        assistant: ResilientAssistant<dyn Assistant>,
    ) -> Self {
        Self {
            orchestrator: CatalogSearchOrchestrator::new(catalog, settings),
            assistant,
        }
    }
}
