use super::indicators::IndicatorSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    Bullish,
    Bearish,
    Neutral,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Bullish => "BULLISH",
            Trend::Bearish => "BEARISH",
            Trend::Neutral => "NEUTRAL",
        };
        f.write_str(label)
    }
}

/// Boolean signals derived from an [`IndicatorSet`]. A signal whose
/// indicator is unavailable is `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    pub rsi_oversold: bool,
    pub rsi_overbought: bool,
    pub rsi_neutral: bool,

    pub stochastic_oversold: bool,
    pub stochastic_overbought: bool,

    /// MACD crossed above its signal line between the previous and latest bar.
    pub macd_bullish_crossover: bool,
    /// MACD crossed below its signal line between the previous and latest bar.
    pub macd_bearish_crossover: bool,
    pub macd_above_signal: bool,
    pub macd_below_signal: bool,

    pub price_above_sma20: bool,
    pub price_below_sma20: bool,
    pub price_above_sma50: bool,
    pub price_below_sma50: bool,
    pub price_above_sma200: bool,
    pub price_below_sma200: bool,

    /// SMA50 is above SMA200 on the latest bar.
    pub golden_cross: bool,
    /// SMA50 is below SMA200 on the latest bar.
    pub death_cross: bool,

    pub price_near_upper_band: bool,
    pub price_near_lower_band: bool,
}

/// How the overall trend was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendVote {
    pub trend: Trend,
    pub bullish_votes: usize,
    pub bearish_votes: usize,
}

/// Full output of a technical-indicator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub current_price: Option<f64>,
    pub date: Option<DateTime<Utc>>,
    pub bars: usize,
    pub indicators: IndicatorSet,
    pub signals: SignalSet,
    pub overall_trend: TrendVote,
    pub unavailable: Vec<String>,
}
