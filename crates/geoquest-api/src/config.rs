use std::env;

use geoquest_core::config::LayeredConfig;
use geoquest_core::error::Result;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    pub search: LayeredConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// `GEOQUEST_CONFIG` may name a TOML file; environment variables override it.
    pub fn from_env() -> Result<Self> {
        let port = env::var("GEOQUEST_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(5001);

        let cors_origin = env::var("GEOQUEST_CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:5173".to_string());

        let mut search = LayeredConfig::with_defaults();
        if let Ok(path) = env::var("GEOQUEST_CONFIG") {
            search = search.load_from_file(path)?;
        }

        Ok(Self {
            port,
            cors_origin,
            search: search.load_from_env(),
        })
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
