//! Tool registry: maps a request tag to the computation that serves it.

use crate::config::EngineConfig;
use crate::indicators::error::IndicatorError;
use crate::models::levels::LevelSet;
use crate::models::series::PriceSeries;
use crate::models::signal::TechnicalAnalysis;
use crate::models::snapshot::MarketSnapshot;
use crate::models::volatility::VolatilityReport;
use crate::services::snapshot::summarize;
use crate::signals::engine::SignalEngine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Tool category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    MarketData,
    TechnicalAnalysis,
}

impl ToolCategory {
    pub fn all() -> [ToolCategory; 2] {
        [ToolCategory::MarketData, ToolCategory::TechnicalAnalysis]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::MarketData => "Market data",
            ToolCategory::TechnicalAnalysis => "Technical analysis",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisTool {
    MarketSnapshot,
    TechnicalIndicators,
    SupportResistance,
    Volatility,
}

impl AnalysisTool {
    pub fn all() -> [AnalysisTool; 4] {
        [
            AnalysisTool::MarketSnapshot,
            AnalysisTool::TechnicalIndicators,
            AnalysisTool::SupportResistance,
            AnalysisTool::Volatility,
        ]
    }

    /// Canonical tag
    pub fn name(&self) -> &'static str {
        match self {
            AnalysisTool::MarketSnapshot => "market_snapshot",
            AnalysisTool::TechnicalIndicators => "technical_indicators",
            AnalysisTool::SupportResistance => "support_resistance",
            AnalysisTool::Volatility => "volatility",
        }
    }

    pub fn category(&self) -> ToolCategory {
        match self {
            AnalysisTool::MarketSnapshot => ToolCategory::MarketData,
            _ => ToolCategory::TechnicalAnalysis,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AnalysisTool::MarketSnapshot => {
                "Latest price, change against the previous close, volume and period range"
            }
            AnalysisTool::TechnicalIndicators => {
                "RSI, MACD, moving averages, Bollinger Bands, stochastic, trading signals and trend"
            }
            AnalysisTool::SupportResistance => {
                "Support and resistance levels from local price extrema"
            }
            AnalysisTool::Volatility => "Daily and annualized volatility, ATR, beta and risk level",
        }
    }
}

impl fmt::Display for AnalysisTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnalysisTool {
    type Err = IndicatorError;

    /// Accepts the canonical tag and the agent-facing function names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "market_snapshot" | "snapshot" | "fetch_stock_data" | "quote" => {
                Ok(AnalysisTool::MarketSnapshot)
            }
            "technical_indicators" | "indicators" | "calculate_technical_indicators" => {
                Ok(AnalysisTool::TechnicalIndicators)
            }
            "support_resistance" | "levels" | "detect_support_resistance" => {
                Ok(AnalysisTool::SupportResistance)
            }
            "volatility" | "risk" | "calculate_volatility" => Ok(AnalysisTool::Volatility),
            _ => Err(IndicatorError::UnknownTool(s.to_string())),
        }
    }
}

/// Input handed to every tool.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest<'a> {
    pub series: &'a PriceSeries,
    pub benchmark: Option<&'a PriceSeries>,
}

impl<'a> AnalysisRequest<'a> {
    pub fn new(series: &'a PriceSeries) -> Self {
        Self {
            series,
            benchmark: None,
        }
    }

    pub fn with_benchmark(mut self, benchmark: &'a PriceSeries) -> Self {
        self.benchmark = Some(benchmark);
        self
    }
}

/// Typed result of one tool run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tool", content = "result", rename_all = "snake_case")]
pub enum AnalysisReport {
    /// `None` for an empty series.
    MarketSnapshot(Option<MarketSnapshot>),
    TechnicalIndicators(TechnicalAnalysis),
    SupportResistance(LevelSet),
    Volatility(VolatilityReport),
}

impl AnalysisReport {
    pub fn tool(&self) -> AnalysisTool {
        match self {
            AnalysisReport::MarketSnapshot(_) => AnalysisTool::MarketSnapshot,
            AnalysisReport::TechnicalIndicators(_) => AnalysisTool::TechnicalIndicators,
            AnalysisReport::SupportResistance(_) => AnalysisTool::SupportResistance,
            AnalysisReport::Volatility(_) => AnalysisTool::Volatility,
        }
    }
}

pub type ToolFn = fn(&AnalysisRequest<'_>, &EngineConfig) -> AnalysisReport;

fn run_market_snapshot(request: &AnalysisRequest<'_>, _config: &EngineConfig) -> AnalysisReport {
    AnalysisReport::MarketSnapshot(summarize(request.series))
}

fn run_technical_indicators(request: &AnalysisRequest<'_>, config: &EngineConfig) -> AnalysisReport {
    AnalysisReport::TechnicalIndicators(SignalEngine::analyze(request.series, config))
}

fn run_support_resistance(request: &AnalysisRequest<'_>, config: &EngineConfig) -> AnalysisReport {
    AnalysisReport::SupportResistance(SignalEngine::support_resistance(request.series, config))
}

fn run_volatility(request: &AnalysisRequest<'_>, config: &EngineConfig) -> AnalysisReport {
    AnalysisReport::Volatility(SignalEngine::volatility(
        request.series,
        request.benchmark,
        config,
    ))
}

/// Dispatch table from tool to computation.
pub struct ToolRegistry {
    tools: HashMap<AnalysisTool, ToolFn>,
}

impl ToolRegistry {
    /// Registry with every built-in tool.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(AnalysisTool::MarketSnapshot, run_market_snapshot);
        registry.register(AnalysisTool::TechnicalIndicators, run_technical_indicators);
        registry.register(AnalysisTool::SupportResistance, run_support_resistance);
        registry.register(AnalysisTool::Volatility, run_volatility);
        registry
    }

    pub fn empty() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register or replace the function behind a tool.
    pub fn register(&mut self, tool: AnalysisTool, function: ToolFn) {
        self.tools.insert(tool, function);
    }

    pub fn get(&self, tool: AnalysisTool) -> Option<ToolFn> {
        self.tools.get(&tool).copied()
    }

    /// Registered tools in a stable order.
    pub fn tools(&self) -> Vec<AnalysisTool> {
        let mut tools: Vec<AnalysisTool> = self.tools.keys().copied().collect();
        tools.sort();
        tools
    }

    pub fn tools_in(&self, category: ToolCategory) -> Vec<AnalysisTool> {
        self.tools()
            .into_iter()
            .filter(|tool| tool.category() == category)
            .collect()
    }

    pub fn run(
        &self,
        tool: AnalysisTool,
        request: &AnalysisRequest<'_>,
        config: &EngineConfig,
    ) -> Result<AnalysisReport, IndicatorError> {
        let function = self
            .get(tool)
            .ok_or_else(|| IndicatorError::UnknownTool(tool.name().to_string()))?;
        debug!(tool = %tool, bars = request.series.len(), "dispatching analysis tool");
        Ok(function(request, config))
    }

    /// Parse `tag` and run the matching tool.
    pub fn dispatch(
        &self,
        tag: &str,
        request: &AnalysisRequest<'_>,
        config: &EngineConfig,
    ) -> Result<AnalysisReport, IndicatorError> {
        let tool: AnalysisTool = tag.parse()?;
        self.run(tool, request, config)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
