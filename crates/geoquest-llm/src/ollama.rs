use std::time::Duration;

use async_trait::async_trait;
use geoquest_core::error::{GeoquestError, Result};
use geoquest_core::models::{DatasetResult, DatasetSummary};
use serde::{Deserialize, Serialize};

use crate::ports::Assistant;
use crate::prompts::{clean_keywords, keyword_prompt, summary_prompt};

/// Ollama-backed assistant implementation
pub struct OllamaAssistant {
    /// Base URL for Ollama API (e.g., "http://localhost:11434")
    base_url: String,

    /// Model name to generate with
    model: String,

    /// Upper bound for one generation request
    timeout: Duration,

    /// HTTP client
    client: reqwest::Client,
}

impl OllamaAssistant {
    /// Create a new Ollama assistant
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            timeout: Duration::from_secs(30),
            client: reqwest::Client::new(),
        }
    }

    /// Create with default localhost URL
    pub fn localhost(model: impl Into<String>) -> Self {
        Self::new("http://localhost:11434", model)
    }

    async fn generate(&self, prompt: String, format: Option<&'static str>) -> Result<String> {
        let request = OllamaGenerateRequest {
            model: self.model.clone(),
            prompt,
            stream: false,
            format,
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| GeoquestError::AssistantUnavailable {
                reason: format!("Failed to connect to Ollama: {}", e),
                remediation: format!(
                    "Ensure Ollama is running at {} and the model '{}' is available. \
                     Run 'ollama pull {}' to download the model.",
                    self.base_url, self.model, self.model
                ),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeoquestError::AssistantUnavailable {
                reason: format!("Ollama API error ({}): {}", status, error_text),
                remediation: format!(
                    "Check that the model '{}' is available. Run 'ollama list' to see installed models.",
                    self.model
                ),
            });
        }

        let generated: OllamaGenerateResponse =
            response.json().await.map_err(|e| GeoquestError::AssistantUnavailable {
                reason: format!("Failed to parse Ollama response: {}", e),
                remediation: "Check Ollama API compatibility".to_string(),
            })?;

        Ok(generated.response)
    }
}

#[async_trait]
impl Assistant for OllamaAssistant {
    async fn extract_keywords(&self, text: &str) -> Result<String> {
        let reply = self.generate(keyword_prompt(text), None).await?;
        clean_keywords(&reply).ok_or_else(|| GeoquestError::AssistantUnavailable {
            reason: "Model returned no keywords".to_string(),
            remediation: format!("Try a different model than '{}'", self.model),
        })
    }

    async fn summarize(&self, datasets: &[DatasetResult]) -> Result<DatasetSummary> {
        if datasets.is_empty() {
            return Ok(DatasetSummary {
                overview: "No datasets matched this search.".to_string(),
                recommendations: Vec::new(),
            });
        }

        let reply = self.generate(summary_prompt(datasets), Some("json")).await?;
        serde_json::from_str(reply.trim())
            .map_err(|e| GeoquestError::Serialization(format!("Unusable summary from model: {}", e)))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Request body for Ollama generate API
#[derive(Debug, Serialize)]
struct OllamaGenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'static str>,
}

/// Response from Ollama generate API
#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}
