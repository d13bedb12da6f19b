use async_trait::async_trait;
use geoquest_core::config::{AssistantSpec, LayeredConfig};
use geoquest_core::error::{GeoquestError, Result};
use geoquest_core::models::{DatasetResult, DatasetSummary};

use crate::ollama::OllamaAssistant;
use crate::ports::Assistant;

/// Assistant used when no text-generation backend is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAssistant;

#[async_trait]
impl Assistant for DisabledAssistant {
    async fn extract_keywords(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }

    async fn summarize(&self, _datasets: &[DatasetResult]) -> Result<DatasetSummary> {
        Err(GeoquestError::AssistantUnavailable {
            reason: "no assistant configured".to_string(),
            remediation: "Set GEOQUEST_ASSISTANT=ollama:<model>".to_string(),
        })
    }

    fn model_name(&self) -> &str {
        "none"
    }
}

/// Wraps an assistant so its failures fall back locally.
///
/// Keyword extraction falls back to the original text and summaries to
/// nothing, so a search never fails because the assistant is down.
pub struct ResilientAssistant<A: ?Sized> {
    inner: Box<A>,
}

impl<A: Assistant + ?Sized> ResilientAssistant<A> {
    pub fn new(inner: Box<A>) -> Self {
        Self { inner }
    }

    pub fn model_name(&self) -> &str {
        self.inner.model_name()
    }

    pub async fn keywords_or_original(&self, text: &str) -> String {
        match self.inner.extract_keywords(text).await {
            Ok(keywords) if !keywords.trim().is_empty() => keywords,
            Ok(_) => {
                tracing::warn!(model = self.inner.model_name(), "Assistant returned blank keywords");
                text.to_string()
            }
            Err(e) => {
                tracing::warn!(
                    model = self.inner.model_name(),
                    error = %e,
                    "Keyword extraction failed, searching with the original text"
                );
                text.to_string()
            }
        }
    }

    pub async fn summary_or_none(&self, datasets: &[DatasetResult]) -> Option<DatasetSummary> {
        match self.inner.summarize(datasets).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                tracing::debug!(model = self.inner.model_name(), error = %e, "No summary");
                None
            }
        }
    }
}

impl ResilientAssistant<dyn Assistant> {
    /// Build the assistant selected by configuration
    pub fn from_config(config: &LayeredConfig) -> Self {
        let inner: Box<dyn Assistant> = match &config.assistant.value {
            AssistantSpec::Disabled => Box::new(DisabledAssistant),
            AssistantSpec::Ollama { model } => Box::new(OllamaAssistant::new(
                config.assistant_url.value.clone(),
                model.clone(),
            )),
        };
        Self::new(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenAssistant;

    #[async_trait]
    impl Assistant for BrokenAssistant {
        async fn extract_keywords(&self, _text: &str) -> Result<String> {
            Err(GeoquestError::AssistantUnavailable {
                reason: "offline".to_string(),
                remediation: "none".to_string(),
            })
        }

        async fn summarize(&self, _datasets: &[DatasetResult]) -> Result<DatasetSummary> {
            Err(GeoquestError::Serialization("garbage".to_string()))
        }

        fn model_name(&self) -> &str {
            "broken"
        }
    }

    struct BlankAssistant;

    #[async_trait]
    impl Assistant for BlankAssistant {
        async fn extract_keywords(&self, _text: &str) -> Result<String> {
            Ok("   ".to_string())
        }

        async fn summarize(&self, _datasets: &[DatasetResult]) -> Result<DatasetSummary> {
            Ok(DatasetSummary {
                overview: "two flood products".to_string(),
                recommendations: Vec::new(),
            })
        }

        fn model_name(&self) -> &str {
            "blank"
        }
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_original_text() {
        let assistant = ResilientAssistant::new(Box::new(BrokenAssistant));
        assert_eq!(assistant.keywords_or_original("Floods in Kerala").await, "Floods in Kerala");
        assert!(assistant.summary_or_none(&[]).await.is_none());
    }

    #[tokio::test]
    async fn test_blank_keywords_fall_back() {
        let assistant = ResilientAssistant::new(Box::new(BlankAssistant));
        assert_eq!(assistant.keywords_or_original("ash cloud").await, "ash cloud");
        assert_eq!(assistant.summary_or_none(&[]).await.unwrap().overview, "two flood products");
    }

    #[tokio::test]
    async fn test_disabled_assistant_passes_text_through() {
        let assistant: ResilientAssistant<dyn Assistant> =
            ResilientAssistant::new(Box::new(DisabledAssistant) as Box<dyn Assistant>);
        assert_eq!(assistant.keywords_or_original("volcano").await, "volcano");
        assert!(assistant.summary_or_none(&[]).await.is_none());
        assert_eq!(assistant.model_name(), "none");
    }

    #[test]
    fn test_from_config_selects_backend() {
        let mut config = LayeredConfig::with_defaults();
        assert_eq!(ResilientAssistant::<dyn Assistant>::from_config(&config).model_name(), "llama3.2");

        config.assistant.value = AssistantSpec::Disabled;
        assert_eq!(ResilientAssistant::<dyn Assistant>::from_config(&config).model_name(), "none");
    }
}
