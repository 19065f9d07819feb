//! Threshold rules turning indicator values into boolean signals.

use crate::config::EngineConfig;
use crate::models::indicators::{IndicatorSet, MacdIndicator};
use crate::models::signal::SignalSet;
use std::cmp::Ordering;

/// Relationship of a price to a moving average: (above, below). Both are
/// false when the average is unavailable or equal to the price.
fn above_below(price: Option<f64>, average: Option<f64>) -> (bool, bool) {
    match (price, average) {
        (Some(price), Some(average)) => (price > average, price < average),
        _ => (false, false),
    }
}

/// Side of the signal line the MACD line is on. A gap within `tolerance`
/// relative to the larger magnitude (floored at 1) is `Equal`.
pub fn macd_side(macd: &MacdIndicator, tolerance: f64) -> Ordering {
    let gap = macd.macd - macd.signal;
    let scale = macd.macd.abs().max(macd.signal.abs()).max(1.0);
    if gap.abs() <= tolerance * scale {
        Ordering::Equal
    } else if gap > 0.0 {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// MACD crossing events between two consecutive bars: (bullish, bearish).
pub fn macd_crossover(
    previous: Option<MacdIndicator>,
    current: Option<MacdIndicator>,
    tolerance: f64,
) -> (bool, bool) {
    match (previous, current) {
        (Some(prev), Some(cur)) => {
            let (before, after) = (macd_side(&prev, tolerance), macd_side(&cur, tolerance));
            (
                before != Ordering::Greater && after == Ordering::Greater,
                before != Ordering::Less && after == Ordering::Less,
            )
        }
        _ => (false, false),
    }
}

/// Derive every signal from the latest close, the latest indicators and the
/// previous bar's MACD.
pub fn derive_signals(
    close: Option<f64>,
    indicators: &IndicatorSet,
    previous_macd: Option<MacdIndicator>,
    config: &EngineConfig,
) -> SignalSet {
    let mut signals = SignalSet::default();

    if let Some(rsi) = indicators.rsi {
        signals.rsi_oversold = rsi < config.rsi_oversold;
        signals.rsi_overbought = rsi > config.rsi_overbought;
        signals.rsi_neutral = !signals.rsi_oversold && !signals.rsi_overbought;
    }

    if let Some(stochastic) = indicators.stochastic {
        signals.stochastic_oversold = stochastic.k < config.stochastic_oversold;
        signals.stochastic_overbought = stochastic.k > config.stochastic_overbought;
    }

    if let Some(macd) = indicators.macd {
        let side = macd_side(&macd, config.macd_tolerance);
        signals.macd_above_signal = side == Ordering::Greater;
        signals.macd_below_signal = side == Ordering::Less;
    }
    (signals.macd_bullish_crossover, signals.macd_bearish_crossover) =
        macd_crossover(previous_macd, indicators.macd, config.macd_tolerance);

    (signals.price_above_sma20, signals.price_below_sma20) = above_below(close, indicators.sma_20);
    (signals.price_above_sma50, signals.price_below_sma50) = above_below(close, indicators.sma_50);
    (signals.price_above_sma200, signals.price_below_sma200) =
        above_below(close, indicators.sma_200);

    // Strict comparisons keep golden and death cross mutually exclusive.
    if let (Some(medium), Some(long)) = (indicators.sma_50, indicators.sma_200) {
        signals.golden_cross = medium > long;
        signals.death_cross = medium < long;
    }

    if let (Some(close), Some(bands)) = (close, indicators.bollinger) {
        signals.price_near_upper_band = close >= bands.upper * (1.0 - config.near_band_pct);
        signals.price_near_lower_band = close <= bands.lower * (1.0 + config.near_band_pct);
    }

    signals
}
