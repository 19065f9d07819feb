//! Command-line arguments for `ta-report`.

use crate::indicators::registry::{ToolCategory, ToolRegistry};
use crate::AnalysisTool;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ta-report")]
#[command(about = "Technical analysis reports over JSON price history")]
#[command(version)]
#[command(after_help = tool_listing())]
pub struct Args {
    /// Analysis tool to run
    pub tool: AnalysisTool,

    /// Comma-separated ticker symbols
    #[arg(value_delimiter = ',', required = true, value_parser = parse_symbol)]
    pub symbols: Vec<String>,

    /// Benchmark symbol for beta
    #[arg(long, value_parser = parse_symbol)]
    pub benchmark: Option<String>,

    /// Directory holding `<SYMBOL>.json` price files
    #[arg(long, env = "DATA_DIR", default_value = "data")]
    pub data_dir: String,

    /// JSON engine configuration; `MARKETLENS_*` variables are used without it
    #[arg(long)]
    pub config: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

fn parse_symbol(raw: &str) -> Result<String, String> {
    let symbol = raw.trim().to_ascii_uppercase();
    if symbol.is_empty() {
        return Err("symbol must not be empty".to_string());
    }
    Ok(symbol)
}

/// Registered tools grouped by category, for the help text.
pub fn tool_listing() -> String {
    let registry = ToolRegistry::new();
    let mut out = String::from("Tools:");
    for category in ToolCategory::all() {
        out.push_str(&format!("\n  {}:", category.label()));
        for tool in registry.tools_in(category) {
            out.push_str(&format!("\n    {:<22}{}", tool.name(), tool.description()));
        }
    }
    out
}
