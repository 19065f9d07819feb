//! marketlens: a deterministic technical-analysis engine.
//!
//! Given a validated [`PriceSeries`] it computes moving averages, oscillators
//! and bands, derives boolean signals and an overall trend, finds support and
//! resistance levels and measures volatility. Every entry point is a pure
//! function of its input and an [`EngineConfig`].

pub mod cli;
pub mod common;
pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;
pub mod signals;

pub use config::EngineConfig;
pub use indicators::error::IndicatorError;
pub use indicators::registry::{AnalysisReport, AnalysisRequest, AnalysisTool, ToolRegistry};
pub use models::{Candle, PriceSeries};
pub use signals::engine::SignalEngine;
