//! Error types for GeoQuest

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoquestError {
    // Query errors
    #[error("Query is empty")]
    EmptyQuery,

    // Catalog errors
    #[error("Catalog unavailable at {endpoint}: {reason}")]
    CatalogUnavailable { endpoint: String, reason: String },

    // Assistant errors
    #[error("Assistant unavailable: {reason}. Try: {remediation}")]
    AssistantUnavailable {
        reason: String,
        remediation: String,
    },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl GeoquestError {
    pub fn catalog(endpoint: impl Into<String>, reason: impl ToString) -> Self {
        Self::CatalogUnavailable {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GeoquestError>;

/// Trim a raw query and reject it when nothing is left.
///
/// The pipeline itself accepts an empty string (the interpreted keyword just
/// becomes empty), so every entry point calls this first.
pub fn validate_query(raw: &str) -> Result<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GeoquestError::EmptyQuery);
    }
    Ok(trimmed)
}
