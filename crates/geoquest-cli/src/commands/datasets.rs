use anyhow::Result;
use geoquest_core::validate_query;

use crate::cli::{join_words, Cli, DatasetsArgs};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use crate::output_types::DatasetRow;

pub async fn execute(cli: &Cli, args: &DatasetsArgs, output: &OutputWriter) -> Result<()> {
    let text = join_words(&args.keywords);
    let keywords = validate_query(&text)?;

    let config = load_config(cli, None)?;
    tracing::info!(keywords, "Searching datasets");

    let datasets = super::orchestrator(&config).search(keywords).await?;
    tracing::info!(count = datasets.len(), "Dataset search complete");

    if output.is_json() {
        return output.result(&datasets);
    }

    output.section(format!("Datasets for \"{}\" ({})", keywords, datasets.len()));
    if datasets.is_empty() {
        output.info("No datasets found");
        return Ok(());
    }
    output.table(datasets.iter().map(DatasetRow::from).collect());

    Ok(())
}
