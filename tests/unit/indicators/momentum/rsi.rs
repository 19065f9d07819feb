//! Unit tests for RSI indicator

use crate::fixtures::{assert_close, candles_from_closes, ramp};
use marketlens::indicators::momentum::{
    calculate_rsi, calculate_rsi_series, rsi_from_averages, NEUTRAL_RSI,
};

#[test]
fn test_rsi_insufficient_data() {
    let candles = candles_from_closes(&ramp(100.0, 110.0, 14));
    assert!(calculate_rsi(&candles, 14).is_none());

    let candles = candles_from_closes(&ramp(100.0, 110.0, 15));
    assert!(calculate_rsi(&candles, 14).is_some());
}

#[test]
fn test_rsi_strictly_increasing_is_100() {
    let candles = candles_from_closes(&ramp(100.0, 130.0, 40));
    assert_eq!(calculate_rsi(&candles, 14), Some(100.0));
}

#[test]
fn test_rsi_strictly_decreasing_is_0() {
    let candles = candles_from_closes(&ramp(130.0, 100.0, 40));
    assert_eq!(calculate_rsi(&candles, 14), Some(0.0));
}

#[test]
fn test_rsi_flat_is_neutral() {
    let candles = candles_from_closes(&[100.0; 30]);
    assert_eq!(calculate_rsi(&candles, 14), Some(NEUTRAL_RSI));
}

#[test]
fn test_rsi_wilder_smoothing_by_hand() {
    // deltas: +1, -1, +1
    // seed (period 2): avg_gain 0.5, avg_loss 0.5 -> 50
    // next: avg_gain 0.75, avg_loss 0.25 -> RS 3 -> 75
    let candles = candles_from_closes(&[1.0, 2.0, 1.0, 2.0]);
    let series = calculate_rsi_series(&candles, 2);
    assert_eq!(series[0], None);
    assert_eq!(series[1], None);
    assert_close(series[2].unwrap(), 50.0, 1e-12);
    assert_close(series[3].unwrap(), 75.0, 1e-12);
}

#[test]
fn test_rsi_from_averages_guards() {
    assert_eq!(rsi_from_averages(1.0, 0.0), 100.0);
    assert_eq!(rsi_from_averages(0.0, 1.0), 0.0);
    assert_eq!(rsi_from_averages(0.0, 0.0), NEUTRAL_RSI);
    assert_close(rsi_from_averages(1.0, 1.0), 50.0, 1e-12);
}

#[test]
fn test_rsi_bounded_on_zigzag() {
    let closes: Vec<f64> = (0..100)
        .map(|i| {
            let step = (i % 7) as f64;
            if i % 3 == 0 {
                100.0 + 2.0 * step
            } else {
                100.0 - step
            }
        })
        .collect();
    let candles = candles_from_closes(&closes);
    for value in calculate_rsi_series(&candles, 14).into_iter().flatten() {
        assert!((0.0..=100.0).contains(&value));
    }
}
