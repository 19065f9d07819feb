//! Unit tests for the ta-report command line

use clap::error::ErrorKind;
use clap::Parser;
use marketlens::cli::{tool_listing, Args};
use marketlens::AnalysisTool;

#[test]
fn test_parses_tool_and_symbols() {
    let args = Args::try_parse_from([
        "ta-report",
        "calculate_technical_indicators",
        "aapl, msft",
        "--benchmark",
        "spy",
        "--data-dir",
        "/tmp/prices",
        "--json",
    ])
    .unwrap();

    assert_eq!(args.tool, AnalysisTool::TechnicalIndicators);
    assert_eq!(args.symbols, vec!["AAPL".to_string(), "MSFT".to_string()]);
    assert_eq!(args.benchmark.as_deref(), Some("SPY"));
    assert_eq!(args.data_dir, "/tmp/prices");
    assert!(args.config.is_none());
    assert!(args.json);
}

#[test]
fn test_symbols_may_be_repeated() {
    let args = Args::try_parse_from(["ta-report", "volatility", "AAPL", "MSFT,GOOG"]).unwrap();
    assert_eq!(args.tool, AnalysisTool::Volatility);
    assert_eq!(args.symbols, vec!["AAPL", "MSFT", "GOOG"]);
    assert!(!args.json);
}

#[test]
fn test_unknown_tool_is_rejected() {
    let err = Args::try_parse_from(["ta-report", "fibonacci", "AAPL"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn test_missing_arguments_are_rejected() {
    let err = Args::try_parse_from(["ta-report", "volatility"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

    assert!(Args::try_parse_from(["ta-report", "volatility", "AAPL", "--benchmark"]).is_err());
    assert!(Args::try_parse_from(["ta-report", "volatility", "AAPL,,MSFT"]).is_err());
}

#[test]
fn test_tool_listing_describes_every_tool() {
    let listing = tool_listing();
    assert!(listing.contains("Market data:"));
    assert!(listing.contains("Technical analysis:"));
    for tool in AnalysisTool::all() {
        assert!(listing.contains(tool.name()), "{tool} missing");
        assert!(listing.contains(tool.description()), "{tool} undescribed");
    }
    // Categories list their own tools only.
    let market = listing.find("Market data:").unwrap();
    let technical = listing.find("Technical analysis:").unwrap();
    let snapshot = listing.find("market_snapshot").unwrap();
    assert!(market < snapshot && snapshot < technical);
}

#[test]
fn test_help_includes_tool_listing() {
    let err = Args::try_parse_from(["ta-report", "--help"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    assert!(err.to_string().contains("support_resistance"));
}
