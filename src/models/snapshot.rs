use super::indicators::Candle;
use serde::{Deserialize, Serialize};

/// Price summary of a series: latest bar, change against the prior close and
/// period extremes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub current_price: f64,
    pub previous_close: f64,
    pub change: f64,
    /// `None` when the previous close is zero.
    pub change_pct: Option<f64>,
    pub volume: f64,
    pub average_volume: f64,
    pub period_high: f64,
    pub period_low: f64,
    pub bars: usize,
    pub latest: Candle,
}

/// Compact quote used when summarizing many series at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub change_pct: Option<f64>,
    pub volume: f64,
}
