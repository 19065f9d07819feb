use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A candidate support or resistance level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: f64,
    /// Bar the extremum was found on.
    pub timestamp: DateTime<Utc>,
    /// Distance from the current price as a percentage of it; `None` when the
    /// current price is zero.
    pub distance_pct: Option<f64>,
}

/// Support levels below and resistance levels above the current price, each
/// ordered nearest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub current_price: Option<f64>,
    pub nearest_support: Option<f64>,
    pub nearest_resistance: Option<f64>,
    pub distance_to_support_pct: Option<f64>,
    pub distance_to_resistance_pct: Option<f64>,
    pub support_levels: Vec<PriceLevel>,
    pub resistance_levels: Vec<PriceLevel>,
}

impl LevelSet {
    pub fn is_empty(&self) -> bool {
        self.support_levels.is_empty() && self.resistance_levels.is_empty()
    }
}
