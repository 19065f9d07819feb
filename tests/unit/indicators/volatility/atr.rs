//! Unit tests for ATR indicator

use crate::fixtures::{assert_close, candles_from_closes, candles_from_hlc};
use marketlens::indicators::volatility::{
    calculate_atr, calculate_atr_average, calculate_atr_series, true_ranges,
};

fn four_bars() -> Vec<marketlens::models::indicators::Candle> {
    candles_from_hlc(&[
        (10.0, 8.0, 9.0),
        (11.0, 9.0, 10.0),
        (13.0, 10.0, 12.0),
        (12.0, 8.0, 9.0),
    ])
}

#[test]
fn test_true_ranges_skip_first_bar() {
    assert_eq!(true_ranges(&four_bars()), vec![2.0, 3.0, 4.0]);
}

#[test]
fn test_atr_wilder_by_hand() {
    // seed mean(2, 3) = 2.5, then (2.5 * 1 + 4) / 2 = 3.25
    let series = calculate_atr_series(&four_bars(), 2);
    assert_eq!(series[0], None);
    assert_eq!(series[1], None);
    assert_close(series[2].unwrap(), 2.5, 1e-12);
    assert_close(series[3].unwrap(), 3.25, 1e-12);

    assert_close(calculate_atr(&four_bars(), 2).unwrap(), 3.25, 1e-12);
    assert_close(calculate_atr_average(&four_bars(), 2).unwrap(), 2.875, 1e-12);
}

#[test]
fn test_atr_gap_uses_previous_close() {
    // Gap up: high - low is 1 but the jump from the previous close is 5.
    let candles = candles_from_hlc(&[(10.0, 9.0, 10.0), (15.0, 14.0, 14.5)]);
    assert_eq!(true_ranges(&candles), vec![5.0]);
}

#[test]
fn test_atr_insufficient_data() {
    let candles = candles_from_closes(&[100.0; 14]);
    assert!(calculate_atr(&candles, 14).is_none());
    assert!(calculate_atr_average(&candles, 14).is_none());

    let candles = candles_from_closes(&[100.0; 15]);
    assert_eq!(calculate_atr(&candles, 14), Some(0.0));
}

#[test]
fn test_atr_empty_series() {
    assert!(calculate_atr_series(&[], 14).is_empty());
}
