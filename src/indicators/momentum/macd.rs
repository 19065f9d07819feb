//! MACD (Moving Average Convergence Divergence) indicator
//!
//! MACD = EMA(fast) - EMA(slow)
//! Signal = EMA(signal) of MACD
//! Histogram = MACD - Signal
//!
//! A bar only gets a value once the signal line exists, which takes
//! `slow + signal - 1` bars. Earlier bars are `None` as a whole; a macd line
//! without its signal is never reported.

use crate::common::math;
use crate::models::indicators::{Candle, MacdIndicator};

/// Bars needed before the first complete MACD value.
pub fn macd_warmup(slow_period: u32, signal_period: u32) -> usize {
    (slow_period as usize + signal_period as usize).saturating_sub(1)
}

pub fn calculate_macd_series(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Vec<Option<MacdIndicator>> {
    if candles.len() < macd_warmup(slow_period, signal_period) {
        return vec![None; candles.len()];
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let fast = math::ema_series(&closes, fast_period as usize);
    let slow = math::ema_series(&closes, slow_period as usize);

    let macd_line: Vec<Option<f64>> = fast
        .iter()
        .zip(&slow)
        .map(|(f, s)| match (f, s) {
            (Some(f), Some(s)) => Some(f - s),
            _ => None,
        })
        .collect();
    let signal_line = math::ema_series_sparse(&macd_line, signal_period as usize);

    macd_line
        .iter()
        .zip(&signal_line)
        .map(|(macd, signal)| match (macd, signal) {
            (Some(macd), Some(signal)) => Some(MacdIndicator {
                macd: *macd,
                signal: *signal,
                histogram: macd - signal,
            }),
            _ => None,
        })
        .collect()
}

/// Calculate MACD on the latest bar
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Option<MacdIndicator> {
    calculate_macd_series(candles, fast_period, slow_period, signal_period)
        .last()
        .copied()
        .flatten()
}
