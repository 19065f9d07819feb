//! ATR (Average True Range) indicator
//!
//! True range needs the previous close, so the first bar has none and is
//! skipped. ATR is the Wilder-smoothed true range, seeded with the mean of the
//! first `period` true ranges; the first value lands on index `period`.

use crate::common::math;
use crate::models::indicators::Candle;

/// True range of every bar after the first.
pub fn true_ranges(candles: &[Candle]) -> Vec<f64> {
    candles
        .windows(2)
        .map(|w| math::true_range(w[1].high, w[1].low, w[0].close))
        .collect()
}

pub fn calculate_atr_series(candles: &[Candle], period: u32) -> Vec<Option<f64>> {
    let mut out = vec![None; candles.len()];
    let smoothed = math::wilder_series(&true_ranges(candles), period as usize);
    for (i, value) in smoothed.into_iter().enumerate() {
        out[i + 1] = value;
    }
    out
}

/// Latest ATR; `None` with fewer than `period + 1` bars.
pub fn calculate_atr(candles: &[Candle], period: u32) -> Option<f64> {
    calculate_atr_series(candles, period).last().copied().flatten()
}

/// Mean of every ATR value the series produced.
pub fn calculate_atr_average(candles: &[Candle], period: u32) -> Option<f64> {
    let values: Vec<f64> = calculate_atr_series(candles, period)
        .into_iter()
        .flatten()
        .collect();
    math::mean(&values)
}
