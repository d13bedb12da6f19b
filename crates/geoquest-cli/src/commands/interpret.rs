use anyhow::Result;
use geoquest_core::validate_query;

use crate::cli::{join_words, Cli, InterpretArgs};
use crate::config_loader::load_config;
use crate::output::OutputWriter;

/// Interpret a query without contacting the catalog
pub fn execute(cli: &Cli, args: &InterpretArgs, output: &OutputWriter) -> Result<()> {
    let text = join_words(&args.query);
    let raw = validate_query(&text)?;

    let config = load_config(cli, args.page_size)?;
    let query = super::orchestrator(&config).interpret(raw);

    tracing::info!(
        raw,
        keyword = %query.parsed.keyword,
        region = ?query.parsed.region,
        "Interpreted query"
    );

    if output.is_json() {
        return output.result(&query);
    }

    output.section("Interpretation");
    output.kv("Keyword", &query.parsed.keyword);
    output.kv("Year", query.parsed.year.as_deref().unwrap_or("-"));
    output.kv("Region", query.parsed.region.as_deref().unwrap_or("-"));

    output.section("Parameters");
    for (name, value) in query.params_sent.query_pairs() {
        output.kv(name, value);
    }

    Ok(())
}
