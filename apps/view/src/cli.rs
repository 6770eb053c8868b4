use std::path::PathBuf;

use clap::Parser;
use region_view::config::{API_BASE_ENV, DEFAULT_API_BASE, DEFAULT_REGION};

#[derive(Debug, Parser)]
#[command(name = "region_view", version, about = "Headless region activity renderer")]
pub struct CliArgs {
    /// Region to render
    #[arg(long, default_value = DEFAULT_REGION)]
    pub region: String,

    /// Base URL of the activity API
    #[arg(long, env = API_BASE_ENV, default_value = DEFAULT_API_BASE)]
    pub api: String,

    /// Read the region snapshot from a JSON file instead of the API
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Print the snapshot as JSON
    #[arg(long, conflicts_with = "html")]
    pub json: bool,

    /// Print a standalone HTML page
    #[arg(long)]
    pub html: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

impl CliArgs {
    pub const fn output(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.html {
            OutputFormat::Html
        } else {
            OutputFormat::Text
        }
    }
}
