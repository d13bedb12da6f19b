use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use geoquest_catalog::CmrCatalog;
use geoquest_llm::{Assistant, ResilientAssistant};
use geoquest_retrieval::SearchSettings;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use geoquest_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geoquest_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;

    tracing::info!(
        port = config.port,
        collections_url = %config.search.collections_url.value,
        assistant = %config.search.assistant.value,
        "Starting GeoQuest API server"
    );

    let state = Arc::new(AppState::new(
        Arc::new(CmrCatalog::from_config(&config.search)),
        SearchSettings::from_config(&config.search),
        ResilientAssistant::<dyn Assistant>::from_config(&config.search),
    ));

    let origin: HeaderValue = config.cors_origin.parse()?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(state).layer(cors);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", config.cors_origin);

    axum::serve(listener, app).await?;
    Ok(())
}
