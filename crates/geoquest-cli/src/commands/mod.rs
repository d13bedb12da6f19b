//! Command implementations

mod assist;
mod config;
mod dataset;
mod datasets;
mod interpret;
mod search;

use std::sync::Arc;

use anyhow::Result;
use geoquest_catalog::CmrCatalog;
use geoquest_core::config::LayeredConfig;
use geoquest_retrieval::{CatalogSearchOrchestrator, SearchSettings};

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    match &cli.command {
        Commands::Search(args) => search::execute(&cli, args, &output).await,
        Commands::Datasets(args) => datasets::execute(&cli, args, &output).await,
        Commands::Assist(args) => assist::execute(&cli, args, &output).await,
        Commands::Dataset(args) => dataset::execute(&cli, args, &output).await,
        Commands::Interpret(args) => interpret::execute(&cli, args, &output),
        Commands::Config => config::execute(&cli, &output),
    }
}

/// Orchestrator backed by the configured HTTP catalog
fn orchestrator(config: &LayeredConfig) -> CatalogSearchOrchestrator {
    CatalogSearchOrchestrator::new(
        Arc::new(CmrCatalog::from_config(config)),
        SearchSettings::from_config(config),
    )
}
