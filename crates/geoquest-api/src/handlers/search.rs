use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use geoquest_core::models::DatasetResult;
use geoquest_retrieval::DirectSearchResult;

use crate::dto::{DatasetSearchParams, SearchParams};
use crate::error::ApiError;
use crate::services::SearchService;
use crate::state::AppState;

/// Search with locally interpreted free text
pub async fn direct_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<DirectSearchResult>, ApiError> {
    tracing::info!(q = %params.q, "Processing direct search request");

    let result = SearchService::direct(&state, &params.q).await?;
    Ok(Json(result))
}

/// Search by keywords and locate every dataset
pub async fn dataset_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DatasetSearchParams>,
) -> Result<Json<Vec<DatasetResult>>, ApiError> {
    tracing::info!(keywords = %params.keywords, "Processing dataset search request");

    let datasets = SearchService::datasets(&state, &params.keywords).await?;

    tracing::info!(count = datasets.len(), "Dataset search complete");
    Ok(Json(datasets))
}
