//! Bollinger Bands indicator
//!
//! Middle Band = SMA(period)
//! Upper Band = Middle + (std_dev * sample standard deviation)
//! Lower Band = Middle - (std_dev * sample standard deviation)

use crate::common::math;
use crate::models::indicators::{BollingerBandsIndicator, Candle};

pub fn calculate_bollinger_bands_series(
    candles: &[Candle],
    period: u32,
    std_dev: f64,
) -> Vec<Option<BollingerBandsIndicator>> {
    let period = period as usize;
    let mut out = vec![None; candles.len()];
    // A single-bar window has no sample deviation.
    if period < 2 || candles.len() < period {
        return out;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    for (offset, window) in closes.windows(period).enumerate() {
        let (Some(middle), Some(std)) = (math::mean(window), math::sample_std_dev(window)) else {
            continue;
        };
        out[offset + period - 1] = Some(BollingerBandsIndicator {
            upper: middle + std_dev * std,
            middle,
            lower: middle - std_dev * std,
        });
    }

    out
}

/// Calculate Bollinger Bands on the latest bar
pub fn calculate_bollinger_bands(
    candles: &[Candle],
    period: u32,
    std_dev: f64,
) -> Option<BollingerBandsIndicator> {
    calculate_bollinger_bands_series(candles, period, std_dev)
        .last()
        .copied()
        .flatten()
}
