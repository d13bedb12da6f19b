use geoquest_core::error::GeoquestError;
use geoquest_core::models::DatasetResult;
use geoquest_core::validate_query;
use geoquest_retrieval::{AssistedSearchResult, DirectSearchResult};

use crate::error::ApiError;
use crate::state::AppState;

/// Runs catalog searches on behalf of the HTTP handlers
pub struct SearchService;

impl SearchService {
    pub async fn direct(state: &AppState, q: &str) -> Result<DirectSearchResult, ApiError> {
        let q = validate_query(q).map_err(|_| ApiError::bad_request("missing q"))?;
        Ok(state.orchestrator.direct_search(q).await?)
    }

    pub async fn datasets(
        state: &AppState,
        keywords: &str,
    ) -> Result<Vec<DatasetResult>, ApiError> {
        let keywords =
            validate_query(keywords).map_err(|_| ApiError::bad_request("missing keywords"))?;
        Ok(state.orchestrator.search(keywords).await?)
    }

    pub async fn assist(state: &AppState, query: &str) -> Result<AssistedSearchResult, ApiError> {
        let query = validate_query(query).map_err(|_| ApiError::bad_request("missing query"))?;
        Ok(state.orchestrator.assisted_search(&state.assistant, query).await?)
    }

    pub async fn dataset(state: &AppState, id: &str) -> Result<DatasetResult, ApiError> {
        match state.orchestrator.dataset(id).await {
            Ok(Some(dataset)) => Ok(dataset),
            Ok(None) => Err(ApiError::not_found(format!("Dataset not found: {}", id))),
            Err(e @ GeoquestError::CatalogUnavailable { .. }) => Err(e.into()),
            Err(e) => {
                tracing::error!(id, error = %e, "Dataset lookup failed");
                Err(ApiError::internal("Failed to load dataset").with_details(e.to_string()))
            }
        }
    }
}
