use anyhow::Result;

use crate::cli::{Cli, DatasetArgs};
use crate::config_loader::load_config;
use crate::output::OutputWriter;

pub async fn execute(cli: &Cli, args: &DatasetArgs, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli, None)?;
    tracing::info!(id = %args.id, "Fetching dataset");

    let Some(dataset) = super::orchestrator(&config).dataset(&args.id).await? else {
        tracing::warn!(id = %args.id, "Dataset not found");
        anyhow::bail!("Dataset not found: {}", args.id);
    };

    if output.is_json() {
        return output.result(&dataset);
    }

    output.section(dataset.title.as_deref().unwrap_or(&args.id));
    output.kv("ID", &args.id);
    output.kv("Data center", dataset.data_center.as_deref().unwrap_or("-"));
    output.kv("Start", &dataset.time_start);
    output.kv(
        "Location",
        format!("{}, {}", dataset.coordinate.latitude, dataset.coordinate.longitude),
    );
    if let Some(link) = &dataset.link {
        output.kv("Link", link);
    }
    if let Some(summary) = &dataset.summary {
        output.section("Summary");
        println!("{}", summary);
    }

    Ok(())
}
