//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::Candle;

/// EMA of closes aligned with `candles`, seeded with the SMA of the first
/// `period` closes.
pub fn calculate_ema_series(candles: &[Candle], period: u32) -> Vec<Option<f64>> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::ema_series(&closes, period as usize)
}

/// Calculate EMA for a specific period
pub fn calculate_ema(candles: &[Candle], period: u32) -> Option<f64> {
    calculate_ema_series(candles, period).last().copied().flatten()
}
