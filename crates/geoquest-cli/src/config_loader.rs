//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use geoquest_core::config::{parse_assistant_spec, CliConfigOverrides, LayeredConfig};

use crate::cli::Cli;

/// Load layered configuration: defaults, optional file, environment, then CLI flags
pub fn load_config(cli: &Cli, search_page_size: Option<usize>) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    if let Some(path) = &cli.config {
        config = config
            .load_from_file(path)
            .with_context(|| format!("Failed to load configuration file {}", path.display()))?;
    }

    let mut config = config.load_from_env();

    let assistant = cli
        .assistant
        .as_deref()
        .map(parse_assistant_spec)
        .transpose()
        .context("Invalid --assistant value")?;

    if search_page_size == Some(0) {
        anyhow::bail!("--page-size must be at least 1");
    }

    config.update_from_cli(CliConfigOverrides {
        collections_url: cli.collections_url.clone(),
        granules_url: cli.granules_url.clone(),
        search_page_size,
        assistant,
    });

    Ok(config)
}
