//! Stochastic oscillator
//!
//! %K = 100 * (close - lowest low) / (highest high - lowest low) over `period`
//! bars, %D = SMA of %K over `smoothing` bars. A flat range has no defined
//! position and reports %K = 50.

use crate::common::math;
use crate::models::indicators::{Candle, StochasticIndicator};

/// %K for a window whose high and low are equal.
pub const FLAT_RANGE_K: f64 = 50.0;

pub fn calculate_stochastic_k_series(candles: &[Candle], period: u32) -> Vec<Option<f64>> {
    let period = period as usize;
    let mut out = vec![None; candles.len()];
    if period == 0 || candles.len() < period {
        return out;
    }

    for (offset, window) in candles.windows(period).enumerate() {
        let highest = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
        let lowest = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);
        let close = window[period - 1].close;
        let range = highest - lowest;
        let k = if range == 0.0 {
            FLAT_RANGE_K
        } else {
            100.0 * (close - lowest) / range
        };
        out[offset + period - 1] = Some(k);
    }

    out
}

pub fn calculate_stochastic_series(
    candles: &[Candle],
    period: u32,
    smoothing: u32,
) -> Vec<Option<StochasticIndicator>> {
    let k_series = calculate_stochastic_k_series(candles, period);
    let mut d_series = vec![None; k_series.len()];
    if let Some(start) = k_series.iter().position(Option::is_some) {
        let dense: Vec<f64> = k_series[start..].iter().flatten().copied().collect();
        for (offset, d) in math::sma_series(&dense, smoothing as usize)
            .into_iter()
            .enumerate()
        {
            d_series[start + offset] = d;
        }
    }

    k_series
        .iter()
        .zip(d_series)
        .map(|(k, d)| k.map(|k| StochasticIndicator { k, d }))
        .collect()
}

/// Latest %K/%D; `None` with fewer than `period` bars.
pub fn calculate_stochastic(
    candles: &[Candle],
    period: u32,
    smoothing: u32,
) -> Option<StochasticIndicator> {
    calculate_stochastic_series(candles, period, smoothing)
        .last()
        .copied()
        .flatten()
}
