use anyhow::Result;
use geoquest_core::validate_query;
use geoquest_llm::{Assistant, ResilientAssistant};

use crate::cli::{join_words, AssistArgs, Cli};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use crate::output_types::DatasetRow;

pub async fn execute(cli: &Cli, args: &AssistArgs, output: &OutputWriter) -> Result<()> {
    let text = join_words(&args.query);
    let query = validate_query(&text)?;

    let config = load_config(cli, None)?;
    let assistant = ResilientAssistant::<dyn Assistant>::from_config(&config);
    tracing::info!(query, model = assistant.model_name(), "Running assisted search");

    let result = super::orchestrator(&config).assisted_search(&assistant, query).await?;
    tracing::info!(
        keywords = %result.extracted_keywords,
        count = result.datasets.len(),
        summarized = result.summary.is_some(),
        "Assisted search complete"
    );

    if output.is_json() {
        return output.result(&result);
    }

    output.kv("Assistant", assistant.model_name());
    output.kv("Keywords", &result.extracted_keywords);

    output.section(format!("Datasets ({})", result.datasets.len()));
    output.table(result.datasets.iter().map(DatasetRow::from).collect());

    match &result.summary {
        Some(summary) => {
            output.section("Summary");
            println!("{}", summary.overview);
            for recommendation in &summary.recommendations {
                output.kv(&recommendation.id, &recommendation.reason);
            }
        }
        None if !result.datasets.is_empty() => {
            output.warning("No summary available from the assistant");
        }
        None => {}
    }

    Ok(())
}
