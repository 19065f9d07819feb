//! Unit tests for EMA indicator

use crate::fixtures::{assert_close, candles_from_closes, ramp};
use marketlens::indicators::trend::{calculate_ema, calculate_ema_series};

#[test]
fn test_ema_insufficient_data() {
    let candles = candles_from_closes(&ramp(100.0, 101.0, 10));
    assert!(calculate_ema(&candles, 20).is_none());
}

#[test]
fn test_ema_seed_and_recurrence() {
    let candles = candles_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let series = calculate_ema_series(&candles, 3);
    assert_eq!(series, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
}

#[test]
fn test_ema_alpha() {
    // alpha = 2 / (4 + 1) = 0.4, seed = mean(10, 20, 30, 40) = 25
    let candles = candles_from_closes(&[10.0, 20.0, 30.0, 40.0, 50.0]);
    let expected = 0.4 * 50.0 + 0.6 * 25.0;
    assert_close(calculate_ema(&candles, 4).unwrap(), expected, 1e-12);
}

#[test]
fn test_ema_constant_series() {
    let candles = candles_from_closes(&[42.0; 30]);
    assert_close(calculate_ema(&candles, 12).unwrap(), 42.0, 1e-12);
}
