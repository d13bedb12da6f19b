use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use geoquest_core::models::DatasetResult;

use crate::error::ApiError;
use crate::services::SearchService;
use crate::state::AppState;

pub async fn get_dataset(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DatasetResult>, ApiError> {
    tracing::info!(id = %id, "Fetching dataset");

    let dataset = SearchService::dataset(&state, &id).await?;
    Ok(Json(dataset))
}
