//! Unit tests for historical volatility and risk classification

use crate::fixtures::{assert_close, candles_from_closes};
use marketlens::indicators::volatility::{
    annualize_volatility, calculate_daily_volatility, classify_risk, daily_returns,
};
use marketlens::models::volatility::RiskLevel;

#[test]
fn test_daily_returns() {
    let candles = candles_from_closes(&[100.0, 110.0, 99.0]);
    let returns = daily_returns(&candles);
    assert_eq!(returns.len(), 2);
    assert_close(returns[0], 0.1, 1e-12);
    assert_close(returns[1], -0.1, 1e-12);
}

#[test]
fn test_daily_returns_skip_zero_base() {
    let candles = candles_from_closes(&[0.0, 10.0, 11.0]);
    let returns = daily_returns(&candles);
    assert_eq!(returns.len(), 1);
    assert_close(returns[0], 0.1, 1e-12);
}

#[test]
fn test_daily_volatility_sample_std_dev() {
    // returns 0.1 and -0.1: sample variance 0.02
    let candles = candles_from_closes(&[100.0, 110.0, 99.0]);
    assert_close(
        calculate_daily_volatility(&candles).unwrap(),
        0.02_f64.sqrt(),
        1e-12,
    );
}

#[test]
fn test_daily_volatility_needs_two_returns() {
    assert!(calculate_daily_volatility(&candles_from_closes(&[100.0, 101.0])).is_none());
    assert!(calculate_daily_volatility(&candles_from_closes(&[100.0])).is_none());
}

#[test]
fn test_flat_series_has_zero_volatility() {
    let candles = candles_from_closes(&[100.0; 30]);
    assert_eq!(calculate_daily_volatility(&candles), Some(0.0));
}

#[test]
fn test_annualize_volatility() {
    assert_close(annualize_volatility(0.01, 252.0), 0.01 * 252f64.sqrt(), 1e-15);
    assert_close(annualize_volatility(0.02, 365.0), 0.02 * 365f64.sqrt(), 1e-15);
}

#[test]
fn test_classify_risk_buckets() {
    assert_eq!(classify_risk(0.10, 0.20, 0.40), RiskLevel::Low);
    assert_eq!(classify_risk(0.30, 0.20, 0.40), RiskLevel::Medium);
    assert_eq!(classify_risk(0.55, 0.20, 0.40), RiskLevel::High);
}

#[test]
fn test_classify_risk_boundaries_fall_low() {
    assert_eq!(classify_risk(0.20, 0.20, 0.40), RiskLevel::Low);
    assert_eq!(classify_risk(0.40, 0.20, 0.40), RiskLevel::Medium);
}
