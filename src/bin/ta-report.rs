//! marketlens report CLI
//!
//! Loads price history from JSON files (`<DATA_DIR>/<SYMBOL>.json`), runs one
//! analysis tool per symbol and prints the result for a downstream
//! summarizer.
//!
//! Usage:
//!   ta-report technical_indicators AAPL,MSFT --json
//!   ta-report volatility AAPL --benchmark SPY --data-dir data

use clap::Parser;
use dotenvy::dotenv;
use marketlens::cli::Args;
use marketlens::config::{get_environment, EngineConfig};
use marketlens::indicators::registry::{AnalysisRequest, AnalysisTool, ToolRegistry};
use marketlens::logging;
use marketlens::report::{render_json, render_text};
use marketlens::services::market_data::{JsonFileProvider, MarketDataProvider};
use marketlens::services::snapshot::quotes;
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let args = Args::parse();
    logging::init_logging();

    let config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::from_env()?,
    };
    info!(environment = %get_environment(), tool = %args.tool, "starting ta-report");

    let provider = JsonFileProvider::new(&args.data_dir);
    let benchmark = args
        .benchmark
        .as_deref()
        .map(|symbol| provider.get_series(symbol))
        .transpose()?;

    // Several symbols with the snapshot tool print a compact quote table.
    if args.tool == AnalysisTool::MarketSnapshot && args.symbols.len() > 1 {
        let mut series = Vec::new();
        for symbol in &args.symbols {
            match provider.get_series(symbol) {
                Ok(s) => series.push(s),
                Err(e) => error!(symbol = %symbol, error = %e, "skipping symbol"),
            }
        }
        let quotes = quotes(&series);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&quotes)?);
        } else {
            for quote in quotes {
                let change = quote
                    .change_pct
                    .map(|c| format!("{c:+.2}%"))
                    .unwrap_or_else(|| "unavailable".to_string());
                println!("{}: {:.2} ({})", quote.symbol, quote.price, change);
            }
        }
        return Ok(());
    }

    let registry = ToolRegistry::new();
    for symbol in &args.symbols {
        let series = provider.get_series(symbol)?;
        let mut request = AnalysisRequest::new(&series);
        if let Some(benchmark) = &benchmark {
            request = request.with_benchmark(benchmark);
        }

        let report = registry.run(args.tool, &request, &config)?;
        if args.json {
            let rendered = render_json(&report, &config.precision);
            println!("{}", serde_json::to_string_pretty(&rendered)?);
        } else {
            println!("{}", render_text(&report, &config.precision));
        }
    }

    Ok(())
}
