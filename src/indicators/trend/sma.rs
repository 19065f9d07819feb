//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::indicators::Candle;

/// SMA of closes aligned with `candles`.
pub fn calculate_sma_series(candles: &[Candle], period: u32) -> Vec<Option<f64>> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::sma_series(&closes, period as usize)
}

/// Mean of the last `period` closes, `None` when fewer bars exist.
pub fn calculate_sma(candles: &[Candle], period: u32) -> Option<f64> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::sma(&closes, period as usize)
}
