use anyhow::Result;
use tabled::Tabled;

use crate::cli::Cli;
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, ConfigOutput};

#[derive(Tabled)]
struct ConfigRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Source")]
    source: String,
}

pub fn execute(cli: &Cli, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli, None)?;
    tracing::debug!(config_file = ?cli.config, "Loaded layered configuration");

    let entries = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| (key, ConfigEntry::new(value, source)))
        .collect();
    let config_output = ConfigOutput { entries };

    if output.is_json() {
        return output.result(&config_output);
    }

    output.section("Configuration");
    let rows: Vec<ConfigRow> = config_output
        .entries
        .into_iter()
        .map(|(key, entry)| ConfigRow {
            key,
            value: entry.value,
            source: entry.source,
        })
        .collect();
    output.table(rows);

    Ok(())
}
