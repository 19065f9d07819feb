//! Unit tests for the tool registry

use crate::fixtures::{ramp, series_from_closes};
use marketlens::config::EngineConfig;
use marketlens::indicators::registry::{
    AnalysisReport, AnalysisRequest, AnalysisTool, ToolCategory, ToolRegistry,
};
use marketlens::indicators::IndicatorError;
use marketlens::models::levels::LevelSet;

#[test]
fn test_tool_names_round_trip() {
    for tool in AnalysisTool::all() {
        assert_eq!(tool.name().parse::<AnalysisTool>().unwrap(), tool);
        assert_eq!(tool.to_string(), tool.name());
    }
}

#[test]
fn test_tool_aliases() {
    assert_eq!(
        "fetch_stock_data".parse::<AnalysisTool>().unwrap(),
        AnalysisTool::MarketSnapshot
    );
    assert_eq!(
        "calculate_technical_indicators".parse::<AnalysisTool>().unwrap(),
        AnalysisTool::TechnicalIndicators
    );
    assert_eq!(
        "Detect-Support-Resistance".parse::<AnalysisTool>().unwrap(),
        AnalysisTool::SupportResistance
    );
    assert_eq!(
        " calculate_volatility ".parse::<AnalysisTool>().unwrap(),
        AnalysisTool::Volatility
    );
}

#[test]
fn test_unknown_tool() {
    let err = "fibonacci".parse::<AnalysisTool>().unwrap_err();
    assert_eq!(err, IndicatorError::UnknownTool("fibonacci".to_string()));
}

#[test]
fn test_registry_lists_all_tools() {
    let registry = ToolRegistry::new();
    assert_eq!(registry.tools(), AnalysisTool::all().to_vec());
    assert_eq!(
        registry.tools_in(ToolCategory::MarketData),
        vec![AnalysisTool::MarketSnapshot]
    );
    assert_eq!(registry.tools_in(ToolCategory::TechnicalAnalysis).len(), 3);
}

#[test]
fn test_dispatch_runs_matching_tool() {
    let registry = ToolRegistry::default();
    let config = EngineConfig::default();
    let series = series_from_closes(&ramp(100.0, 120.0, 60));
    let request = AnalysisRequest::new(&series);

    for tool in AnalysisTool::all() {
        let report = registry.run(tool, &request, &config).unwrap();
        assert_eq!(report.tool(), tool);
    }

    let report = registry
        .dispatch("calculate_technical_indicators", &request, &config)
        .unwrap();
    match report {
        AnalysisReport::TechnicalIndicators(analysis) => {
            assert_eq!(analysis.bars, 60);
            assert!(analysis.indicators.rsi.is_some());
        }
        other => panic!("unexpected report {other:?}"),
    }
}

#[test]
fn test_dispatch_unknown_tag() {
    let registry = ToolRegistry::new();
    let series = series_from_closes(&[1.0, 2.0]);
    let request = AnalysisRequest::new(&series);
    let result = registry.dispatch("nope", &request, &EngineConfig::default());
    assert!(matches!(result, Err(IndicatorError::UnknownTool(_))));
}

#[test]
fn test_empty_registry_rejects_run() {
    let registry = ToolRegistry::empty();
    let series = series_from_closes(&[1.0, 2.0]);
    let request = AnalysisRequest::new(&series);
    let result = registry.run(AnalysisTool::Volatility, &request, &EngineConfig::default());
    assert_eq!(
        result,
        Err(IndicatorError::UnknownTool("volatility".to_string()))
    );
}

fn always_empty(_: &AnalysisRequest<'_>, _: &EngineConfig) -> AnalysisReport {
    AnalysisReport::SupportResistance(LevelSet::default())
}

#[test]
fn test_register_replaces_tool() {
    let mut registry = ToolRegistry::new();
    registry.register(AnalysisTool::SupportResistance, always_empty);

    let series = series_from_closes(&[5.0, 4.0, 3.0, 2.0, 1.0, 0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let request = AnalysisRequest::new(&series);
    let report = registry
        .run(AnalysisTool::SupportResistance, &request, &EngineConfig::default())
        .unwrap();
    assert_eq!(report, AnalysisReport::SupportResistance(LevelSet::default()));
}

#[test]
fn test_volatility_uses_benchmark() {
    let registry = ToolRegistry::new();
    let config = EngineConfig::default();
    let series = series_from_closes(&[100.0, 102.0, 101.0, 104.0, 103.0]);
    let benchmark = series_from_closes(&[50.0, 51.0, 50.5, 52.0, 51.5]);

    let without = registry
        .run(AnalysisTool::Volatility, &AnalysisRequest::new(&series), &config)
        .unwrap();
    let with = registry
        .run(
            AnalysisTool::Volatility,
            &AnalysisRequest::new(&series).with_benchmark(&benchmark),
            &config,
        )
        .unwrap();

    match (without, with) {
        (AnalysisReport::Volatility(a), AnalysisReport::Volatility(b)) => {
            assert!(a.beta.is_none());
            assert!(b.beta.is_some());
        }
        other => panic!("unexpected reports {other:?}"),
    }
}

#[test]
fn test_report_serializes_with_tool_tag() {
    let report = AnalysisReport::MarketSnapshot(None);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["tool"], "market_snapshot");
    assert!(json["result"].is_null());
}
