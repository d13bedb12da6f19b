use std::sync::Arc;

use axum::{extract::State, Json};
use geoquest_retrieval::AssistedSearchResult;

use crate::dto::AssistRequest;
use crate::error::ApiError;
use crate::services::SearchService;
use crate::state::AppState;

pub async fn assisted_search(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AssistRequest>,
) -> Result<Json<AssistedSearchResult>, ApiError> {
    tracing::info!(
        query = %request.query,
        model = state.assistant.model_name(),
        "Processing assisted search request"
    );

    let result = SearchService::assist(&state, &request.query).await?;
    Ok(Json(result))
}
