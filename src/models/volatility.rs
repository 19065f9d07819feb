use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        };
        f.write_str(label)
    }
}

/// Volatility and risk metrics for one series.
///
/// Volatilities are fractions (0.25 = 25%); the presentation layer converts
/// them to percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub daily_volatility: Option<f64>,
    pub annualized_volatility: Option<f64>,
    pub atr: Option<f64>,
    /// Mean of every ATR value computed over the series.
    pub atr_average: Option<f64>,
    pub beta: Option<f64>,
    pub risk_level: Option<RiskLevel>,
}
