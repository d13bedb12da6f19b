use anyhow::Result;
use geoquest_core::validate_query;
use tabled::Tabled;

use crate::cli::{join_words, Cli, SearchArgs};
use crate::config_loader::load_config;
use crate::output::{truncate, OutputWriter};

#[derive(Tabled)]
struct HitRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Link")]
    link: String,
}

pub async fn execute(cli: &Cli, args: &SearchArgs, output: &OutputWriter) -> Result<()> {
    let text = join_words(&args.query);
    let query = validate_query(&text)?;

    let config = load_config(cli, args.page_size)?;
    tracing::info!(
        query,
        collections_url = %config.collections_url.value,
        "Running direct search"
    );

    let result = super::orchestrator(&config).direct_search(query).await?;
    tracing::info!(count = result.results.len(), "Direct search complete");

    if output.is_json() {
        return output.result(&result);
    }

    let params = &result.query.params_sent;
    output.section("Query");
    output.kv("Keyword", &params.keyword);
    output.kv("Temporal", params.temporal.as_deref().unwrap_or("-"));
    output.kv("Bounding box", params.bounding_box.as_deref().unwrap_or("-"));

    output.section(format!("Results ({})", result.results.len()));
    if result.results.is_empty() {
        output.info("No collections matched");
        return Ok(());
    }

    let rows: Vec<HitRow> = result
        .results
        .iter()
        .map(|hit| HitRow {
            id: hit.id.clone().unwrap_or_default(),
            title: truncate(hit.title.as_deref().unwrap_or(""), 60),
            link: hit.link.clone().unwrap_or_default(),
        })
        .collect();
    output.table(rows);

    Ok(())
}
