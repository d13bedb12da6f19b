use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// GeoQuest - Earth-observation dataset search
#[derive(Parser, Debug)]
#[command(name = "geoquest")]
#[command(about = "Search Earth-observation catalogs and locate the datasets found", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// TOML configuration file
    #[arg(long, global = true, env = "GEOQUEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Collection search endpoint
    #[arg(long, global = true)]
    pub collections_url: Option<String>,

    /// Granule search endpoint
    #[arg(long, global = true)]
    pub granules_url: Option<String>,

    /// Text-generation assistant (none or ollama:<model>)
    #[arg(long, global = true)]
    pub assistant: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interpret free text locally and search the catalog with it
    Search(SearchArgs),

    /// Search by keywords and locate every dataset found
    Datasets(DatasetsArgs),

    /// Let the assistant choose keywords, then search and summarise
    Assist(AssistArgs),

    /// Show a single dataset by concept id
    Dataset(DatasetArgs),

    /// Show how a query would be interpreted, without searching
    Interpret(InterpretArgs),

    /// Show the effective configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Free-text query, e.g. "flood india 2020"
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Number of collections to request
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Parser, Debug)]
pub struct DatasetsArgs {
    /// Keywords sent to the catalog as-is
    #[arg(required = true)]
    pub keywords: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct AssistArgs {
    /// Conversational request
    #[arg(required = true)]
    pub query: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct DatasetArgs {
    /// Collection concept id, e.g. C1000000001-LANCEMODIS
    pub id: String,
}

#[derive(Parser, Debug)]
pub struct InterpretArgs {
    /// Free-text query
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Page size to show in the parameters
    #[arg(long)]
    pub page_size: Option<usize>,
}

/// Join positional words into a single query string
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
