//! Historical volatility and risk classification

use crate::common::math;
use crate::models::indicators::Candle;
use crate::models::volatility::RiskLevel;

/// Close-to-close fractional returns.
pub fn daily_returns(candles: &[Candle]) -> Vec<f64> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::pct_returns(&closes)
}

/// Sample standard deviation of daily returns; needs two returns.
pub fn calculate_daily_volatility(candles: &[Candle]) -> Option<f64> {
    math::sample_std_dev(&daily_returns(candles))
}

/// Scale a daily volatility by the square root of the trading days per year.
pub fn annualize_volatility(daily_volatility: f64, trading_days_per_year: f64) -> f64 {
    daily_volatility * trading_days_per_year.sqrt()
}

/// Bucket an annualized volatility. Values equal to a threshold fall into the
/// lower bucket.
pub fn classify_risk(annualized_volatility: f64, medium_threshold: f64, high_threshold: f64) -> RiskLevel {
    if annualized_volatility > high_threshold {
        RiskLevel::High
    } else if annualized_volatility > medium_threshold {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
