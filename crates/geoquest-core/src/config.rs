use crate::error::{GeoquestError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_COLLECTIONS_URL: &str = "https://cmr.earthdata.nasa.gov/search/collections.json";
pub const DEFAULT_GRANULES_URL: &str = "https://cmr.earthdata.nasa.gov/search/granules.json";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Which text-generation backend to use for keyword extraction and summaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssistantSpec {
    /// No assistant; keyword extraction passes the text through
    Disabled,
    /// Ollama with the given model name
    Ollama { model: String },
}

impl std::fmt::Display for AssistantSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssistantSpec::Disabled => write!(f, "none"),
            AssistantSpec::Ollama { model } => write!(f, "ollama:{}", model),
        }
    }
}

/// Layered configuration for GeoQuest
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub collections_url: ConfigValue<String>,
    pub granules_url: ConfigValue<String>,
    pub search_page_size: ConfigValue<usize>,
    pub enrichment_page_size: ConfigValue<usize>,
    pub granule_page_size: ConfigValue<usize>,
    pub collection_timeout_secs: ConfigValue<u64>,
    pub granule_timeout_secs: ConfigValue<u64>,
    pub assistant: ConfigValue<AssistantSpec>,
    pub assistant_url: ConfigValue<String>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            collections_url: ConfigValue::new(
                DEFAULT_COLLECTIONS_URL.to_string(),
                ConfigSource::Default,
            ),
            granules_url: ConfigValue::new(DEFAULT_GRANULES_URL.to_string(), ConfigSource::Default),
            search_page_size: ConfigValue::new(10, ConfigSource::Default),
            enrichment_page_size: ConfigValue::new(20, ConfigSource::Default),
            granule_page_size: ConfigValue::new(5, ConfigSource::Default),
            collection_timeout_secs: ConfigValue::new(20, ConfigSource::Default),
            granule_timeout_secs: ConfigValue::new(15, ConfigSource::Default),
            assistant: ConfigValue::new(
                AssistantSpec::Ollama {
                    model: "llama3.2".to_string(),
                },
                ConfigSource::Default,
            ),
            assistant_url: ConfigValue::new(
                "http://localhost:11434".to_string(),
                ConfigSource::Default,
            ),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GeoquestError::ConfigMissing {
                key: format!("config file {}", path.display()),
            });
        }
        let content = fs::read_to_string(path)?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| GeoquestError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(url) = file_config.collections_url {
            self.collections_url.update(url, ConfigSource::File);
        }

        if let Some(url) = file_config.granules_url {
            self.granules_url.update(url, ConfigSource::File);
        }

        if let Some(size) = file_config.search_page_size {
            self.search_page_size.update(check_page_size("search_page_size", size)?, ConfigSource::File);
        }

        if let Some(size) = file_config.enrichment_page_size {
            self.enrichment_page_size
                .update(check_page_size("enrichment_page_size", size)?, ConfigSource::File);
        }

        if let Some(size) = file_config.granule_page_size {
            self.granule_page_size
                .update(check_page_size("granule_page_size", size)?, ConfigSource::File);
        }

        if let Some(secs) = file_config.collection_timeout_secs {
            self.collection_timeout_secs
                .update(check_timeout("collection_timeout_secs", secs)?, ConfigSource::File);
        }

        if let Some(secs) = file_config.granule_timeout_secs {
            self.granule_timeout_secs
                .update(check_timeout("granule_timeout_secs", secs)?, ConfigSource::File);
        }

        if let Some(assistant) = file_config.assistant {
            self.assistant.update(parse_assistant_spec(&assistant)?, ConfigSource::File);
        }

        if let Some(url) = file_config.assistant_url {
            self.assistant_url.update(url, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        if let Ok(url) = env::var("GEOQUEST_COLLECTIONS_URL") {
            self.collections_url.update(url, ConfigSource::Environment);
        }

        if let Ok(url) = env::var("GEOQUEST_GRANULES_URL") {
            self.granules_url.update(url, ConfigSource::Environment);
        }

        if let Some(size) = env_page_size("GEOQUEST_SEARCH_PAGE_SIZE") {
            self.search_page_size.update(size, ConfigSource::Environment);
        }

        if let Some(size) = env_page_size("GEOQUEST_ENRICHMENT_PAGE_SIZE") {
            self.enrichment_page_size.update(size, ConfigSource::Environment);
        }

        if let Some(size) = env_page_size("GEOQUEST_GRANULE_PAGE_SIZE") {
            self.granule_page_size.update(size, ConfigSource::Environment);
        }

        if let Some(secs) = env_seconds("GEOQUEST_COLLECTION_TIMEOUT") {
            self.collection_timeout_secs.update(secs, ConfigSource::Environment);
        }

        if let Some(secs) = env_seconds("GEOQUEST_GRANULE_TIMEOUT") {
            self.granule_timeout_secs.update(secs, ConfigSource::Environment);
        }

        // GEOQUEST_ASSISTANT
        if let Ok(assistant_str) = env::var("GEOQUEST_ASSISTANT") {
            match parse_assistant_spec(&assistant_str) {
                Ok(assistant) => self.assistant.update(assistant, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GEOQUEST_ASSISTANT value '{}': expected 'none' or 'ollama:<model>'",
                    assistant_str
                ),
            }
        }

        if let Ok(url) = env::var("GEOQUEST_ASSISTANT_URL") {
            self.assistant_url.update(url, ConfigSource::Environment);
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(url) = overrides.collections_url {
            self.collections_url.update(url, ConfigSource::Cli);
        }

        if let Some(url) = overrides.granules_url {
            self.granules_url.update(url, ConfigSource::Cli);
        }

        if let Some(size) = overrides.search_page_size {
            self.search_page_size.update(size, ConfigSource::Cli);
        }

        if let Some(assistant) = overrides.assistant {
            self.assistant.update(assistant, ConfigSource::Cli);
        }
    }

    pub fn collection_timeout(&self) -> Duration {
        Duration::from_secs(self.collection_timeout_secs.value)
    }

    pub fn granule_timeout(&self) -> Duration {
        Duration::from_secs(self.granule_timeout_secs.value)
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "collections_url".to_string(),
            (self.collections_url.value.clone(), self.collections_url.source),
        );
        map.insert(
            "granules_url".to_string(),
            (self.granules_url.value.clone(), self.granules_url.source),
        );
        map.insert(
            "search_page_size".to_string(),
            (self.search_page_size.value.to_string(), self.search_page_size.source),
        );
        map.insert(
            "enrichment_page_size".to_string(),
            (self.enrichment_page_size.value.to_string(), self.enrichment_page_size.source),
        );
        map.insert(
            "granule_page_size".to_string(),
            (self.granule_page_size.value.to_string(), self.granule_page_size.source),
        );
        map.insert(
            "collection_timeout".to_string(),
            (format!("{}s", self.collection_timeout_secs.value), self.collection_timeout_secs.source),
        );
        map.insert(
            "granule_timeout".to_string(),
            (format!("{}s", self.granule_timeout_secs.value), self.granule_timeout_secs.source),
        );
        map.insert("assistant".to_string(), (self.assistant.value.to_string(), self.assistant.source));
        map.insert(
            "assistant_url".to_string(),
            (self.assistant_url.value.clone(), self.assistant_url.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    collections_url: Option<String>,
    granules_url: Option<String>,
    search_page_size: Option<usize>,
    enrichment_page_size: Option<usize>,
    granule_page_size: Option<usize>,
    collection_timeout_secs: Option<u64>,
    granule_timeout_secs: Option<u64>,
    assistant: Option<String>,
    assistant_url: Option<String>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub collections_url: Option<String>,
    pub granules_url: Option<String>,
    pub search_page_size: Option<usize>,
    pub assistant: Option<AssistantSpec>,
}

/// Parse an assistant spec such as `none` or `ollama:llama3.2`
pub fn parse_assistant_spec(s: &str) -> Result<AssistantSpec> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("none") || s.eq_ignore_ascii_case("off") {
        return Ok(AssistantSpec::Disabled);
    }

    match s.split_once(':') {
        Some((provider, model)) if provider.eq_ignore_ascii_case("ollama") && !model.is_empty() => {
            Ok(AssistantSpec::Ollama {
                model: model.to_string(),
            })
        }
        _ => Err(GeoquestError::ConfigInvalid {
            key: "assistant".to_string(),
            reason: format!("Invalid assistant: {}. Use none or ollama:<model>", s),
        }),
    }
}

fn check_page_size(key: &str, size: usize) -> Result<usize> {
    if size == 0 {
        return Err(GeoquestError::ConfigInvalid {
            key: key.to_string(),
            reason: "page size must be at least 1".to_string(),
        });
    }
    Ok(size)
}

fn check_timeout(key: &str, secs: u64) -> Result<u64> {
    if secs == 0 {
        return Err(GeoquestError::ConfigInvalid {
            key: key.to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }
    Ok(secs)
}

fn env_page_size(var: &str) -> Option<usize> {
    let raw = env::var(var).ok()?;
    match raw.parse::<usize>() {
        Ok(size) if size > 0 => Some(size),
        _ => {
            tracing::warn!("Invalid {} value '{}': expected a positive integer", var, raw);
            None
        }
    }
}

fn env_seconds(var: &str) -> Option<u64> {
    let raw = env::var(var).ok()?;
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Some(secs),
        _ => {
            tracing::warn!("Invalid {} value '{}': expected a positive number of seconds", var, raw);
            None
        }
    }
}
