use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/search", get(handlers::direct_search))
        .route("/api/datasets", get(handlers::dataset_search))
        .route("/api/dataset/{id}", get(handlers::get_dataset))
        .route("/api/assist", post(handlers::assisted_search))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
