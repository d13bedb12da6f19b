//! Assistant port definition

use async_trait::async_trait;
use geoquest_core::error::Result;
use geoquest_core::models::{DatasetResult, DatasetSummary};

/// Port for the text-generation collaborator
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Reduce free text to a catalog keyword string
    async fn extract_keywords(&self, text: &str) -> Result<String>;

    /// Summarise a result list and point out the most relevant datasets
    async fn summarize(&self, datasets: &[DatasetResult]) -> Result<DatasetSummary>;

    /// Name of the backing model, for logs and diagnostics
    fn model_name(&self) -> &str;
}
