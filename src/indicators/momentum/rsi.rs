//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS)), RS = average gain / average loss.
//! Averages use Wilder smoothing seeded with the simple mean of the first
//! `period` close-to-close deltas.

use crate::models::indicators::Candle;

/// RSI when there has been no movement at all.
pub const NEUTRAL_RSI: f64 = 50.0;

/// RSI from smoothed averages.
///
/// No losses gives 100, no gains gives 0, and a flat window (neither) gives
/// [`NEUTRAL_RSI`].
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return NEUTRAL_RSI;
        }
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// RSI aligned with `candles`; the first value lands on index `period`.
pub fn calculate_rsi_series(candles: &[Candle], period: u32) -> Vec<Option<f64>> {
    let period = period as usize;
    let mut out = vec![None; candles.len()];
    if period == 0 || candles.len() < period + 1 {
        return out;
    }

    let (gains, losses): (Vec<f64>, Vec<f64>) = candles
        .windows(2)
        .map(|w| {
            let change = w[1].close - w[0].close;
            (change.max(0.0), (-change).max(0.0))
        })
        .unzip();

    let n = period as f64;
    let mut avg_gain = gains[..period].iter().sum::<f64>() / n;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / n;
    out[period] = Some(rsi_from_averages(avg_gain, avg_loss));

    for i in period..gains.len() {
        avg_gain = (avg_gain * (n - 1.0) + gains[i]) / n;
        avg_loss = (avg_loss * (n - 1.0) + losses[i]) / n;
        out[i + 1] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    out
}

/// Latest RSI; `None` with fewer than `period + 1` bars.
pub fn calculate_rsi(candles: &[Candle], period: u32) -> Option<f64> {
    calculate_rsi_series(candles, period).last().copied().flatten()
}
