use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochasticIndicator {
    pub k: f64,
    /// `None` until enough %K values exist for the smoothing window.
    pub d: Option<f64>,
}

/// Latest value of every indicator the engine computes.
///
/// A `None` field means the series was too short for that indicator; it is
/// serialized as `null` so consumers can tell it apart from a computed zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub sma_20: Option<f64>,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
    pub ema_12: Option<f64>,
    pub ema_26: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<MacdIndicator>,
    pub bollinger: Option<BollingerBandsIndicator>,
    pub stochastic: Option<StochasticIndicator>,
    pub atr: Option<f64>,
}

impl IndicatorSet {
    /// Names of the indicators that could not be computed.
    pub fn unavailable(&self) -> Vec<&'static str> {
        let checks = [
            ("sma_20", self.sma_20.is_none()),
            ("sma_50", self.sma_50.is_none()),
            ("sma_200", self.sma_200.is_none()),
            ("ema_12", self.ema_12.is_none()),
            ("ema_26", self.ema_26.is_none()),
            ("rsi", self.rsi.is_none()),
            ("macd", self.macd.is_none()),
            ("bollinger", self.bollinger.is_none()),
            ("stochastic", self.stochastic.is_none()),
            ("atr", self.atr.is_none()),
        ];
        checks
            .iter()
            .filter(|(_, missing)| *missing)
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.unavailable().is_empty()
    }
}
