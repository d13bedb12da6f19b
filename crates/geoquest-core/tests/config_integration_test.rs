//! Integration tests for layered configuration
//!
//! Precedence: CLI arguments > Environment variables > Config file > Defaults

use geoquest_core::config::{
    AssistantSpec, CliConfigOverrides, ConfigSource, LayeredConfig, DEFAULT_GRANULES_URL,
};
use geoquest_core::GeoquestError;
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

fn clear_env() {
    for var in [
        "GEOQUEST_COLLECTIONS_URL",
        "GEOQUEST_GRANULES_URL",
        "GEOQUEST_SEARCH_PAGE_SIZE",
        "GEOQUEST_ENRICHMENT_PAGE_SIZE",
        "GEOQUEST_GRANULE_PAGE_SIZE",
        "GEOQUEST_COLLECTION_TIMEOUT",
        "GEOQUEST_GRANULE_TIMEOUT",
        "GEOQUEST_ASSISTANT",
        "GEOQUEST_ASSISTANT_URL",
    ] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
collections_url = "http://file/collections.json"
granule_page_size = 2
"#
    )
    .unwrap();

    env::set_var("GEOQUEST_COLLECTIONS_URL", "http://env/collections.json");

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();

    assert_eq!(config.collections_url.value, "http://env/collections.json");
    assert_eq!(config.collections_url.source, ConfigSource::Environment);
    assert_eq!(config.granule_page_size.value, 2);
    assert_eq!(config.granule_page_size.source, ConfigSource::File);
    assert_eq!(config.granules_url.value, DEFAULT_GRANULES_URL);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_values_are_ignored() {
    clear_env();
    env::set_var("GEOQUEST_SEARCH_PAGE_SIZE", "many");
    env::set_var("GEOQUEST_GRANULE_TIMEOUT", "-4");
    env::set_var("GEOQUEST_ASSISTANT", "telepathy");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.search_page_size.value, 10);
    assert_eq!(config.search_page_size.source, ConfigSource::Default);
    assert_eq!(config.granule_timeout_secs.value, 15);
    assert_eq!(config.assistant.source, ConfigSource::Default);

    clear_env();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env();
    env::set_var("GEOQUEST_ASSISTANT", "ollama:mistral");

    let mut config = LayeredConfig::with_defaults().load_from_env();
    assert_eq!(
        config.assistant.value,
        AssistantSpec::Ollama {
            model: "mistral".to_string()
        }
    );

    config.update_from_cli(CliConfigOverrides {
        assistant: Some(AssistantSpec::Disabled),
        ..Default::default()
    });

    assert_eq!(config.assistant.value, AssistantSpec::Disabled);
    assert_eq!(config.assistant.source, ConfigSource::Cli);

    clear_env();
}

#[test]
#[serial]
fn test_zero_env_timeouts_are_ignored() {
    clear_env();
    env::set_var("GEOQUEST_COLLECTION_TIMEOUT", "0");
    env::set_var("GEOQUEST_GRANULE_TIMEOUT", "0");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.collection_timeout_secs.value, 20);
    assert_eq!(config.collection_timeout_secs.source, ConfigSource::Default);
    assert_eq!(config.granule_timeout_secs.value, 15);

    clear_env();
}

#[test]
fn test_missing_file_is_config_error() {
    let err = LayeredConfig::with_defaults()
        .load_from_file("/nonexistent/geoquest.toml")
        .unwrap_err();
    assert!(matches!(err, GeoquestError::ConfigMissing { ref key } if key.contains("/nonexistent/geoquest.toml")));
}

#[test]
fn test_unreadable_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = LayeredConfig::with_defaults().load_from_file(dir.path()).unwrap_err();
    assert!(matches!(err, GeoquestError::Io(_)));
}

#[test]
fn test_malformed_toml_is_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "collections_url = [").unwrap();

    let err = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse TOML"));
}
