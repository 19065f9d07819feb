//! Unit tests for MACD indicator

use crate::fixtures::{assert_close, candles_from_closes, ramp};
use marketlens::indicators::momentum::{
    calculate_macd, calculate_macd_series, macd_warmup,
};

#[test]
fn test_macd_warmup_policy() {
    assert_eq!(macd_warmup(26, 9), 34);

    let candles = candles_from_closes(&ramp(100.0, 120.0, 33));
    assert!(calculate_macd(&candles, 12, 26, 9).is_none());
    let series = calculate_macd_series(&candles, 12, 26, 9);
    assert_eq!(series.len(), 33);
    assert!(series.iter().all(Option::is_none));

    let candles = candles_from_closes(&ramp(100.0, 120.0, 34));
    assert!(calculate_macd(&candles, 12, 26, 9).is_some());
}

#[test]
fn test_macd_series_is_none_until_signal_exists() {
    let candles = candles_from_closes(&ramp(100.0, 120.0, 40));
    let series = calculate_macd_series(&candles, 12, 26, 9);
    assert!(series[..33].iter().all(Option::is_none));
    assert!(series[33..].iter().all(Option::is_some));
}

#[test]
fn test_macd_small_periods_by_hand() {
    // EMA2: 1.5, 2.5, 3.5, 4.5 ; EMA3: 2, 3, 4 ; MACD line: 0.5 from index 2
    // Signal EMA2 over the MACD line is seeded at index 3.
    let candles = candles_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let series = calculate_macd_series(&candles, 2, 3, 2);
    assert!(series[..3].iter().all(Option::is_none));

    let last = series[4].unwrap();
    assert_close(last.macd, 0.5, 1e-12);
    assert_close(last.signal, 0.5, 1e-12);
    assert_close(last.histogram, 0.0, 1e-12);
}

#[test]
fn test_macd_histogram_is_exact_difference() {
    let closes: Vec<f64> = (0..120)
        .map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0 + i as f64 * 0.1)
        .collect();
    let candles = candles_from_closes(&closes);
    for macd in calculate_macd_series(&candles, 12, 26, 9).into_iter().flatten() {
        assert_eq!(macd.histogram, macd.macd - macd.signal);
    }
}

#[test]
fn test_macd_flat_series_is_zero() {
    let candles = candles_from_closes(&[100.0; 60]);
    let macd = calculate_macd(&candles, 12, 26, 9).unwrap();
    assert_close(macd.macd, 0.0, 1e-12);
    assert_close(macd.signal, 0.0, 1e-12);
    assert_close(macd.histogram, 0.0, 1e-12);
}

#[test]
fn test_macd_positive_in_uptrend() {
    let candles = candles_from_closes(&ramp(100.0, 200.0, 100));
    let macd = calculate_macd(&candles, 12, 26, 9).unwrap();
    assert!(macd.macd > 0.0);
}
