//! Price summaries over a whole series.

use crate::common::math;
use crate::models::series::PriceSeries;
use crate::models::snapshot::{MarketSnapshot, Quote};

/// Summarize a series; `None` when it has no bars.
///
/// With a single bar the previous close is the current close, so the change
/// is zero.
pub fn summarize(series: &PriceSeries) -> Option<MarketSnapshot> {
    let candles = series.candles();
    let latest = *candles.last()?;
    let previous_close = candles
        .len()
        .checked_sub(2)
        .map(|i| candles[i].close)
        .unwrap_or(latest.close);

    let change = latest.close - previous_close;
    let change_pct = (previous_close != 0.0).then(|| change / previous_close * 100.0);

    let volumes: Vec<f64> = candles.iter().map(|c| c.volume).collect();
    let period_high = candles.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let period_low = candles.iter().map(|c| c.low).fold(f64::MAX, f64::min);

    Some(MarketSnapshot {
        symbol: series.symbol().map(str::to_string),
        current_price: latest.close,
        previous_close,
        change,
        change_pct,
        volume: latest.volume,
        average_volume: math::mean(&volumes).unwrap_or(0.0),
        period_high,
        period_low,
        bars: candles.len(),
        latest,
    })
}

/// Quote for each non-empty series, in input order. Series without a symbol
/// are labelled by position.
pub fn quotes(series: &[PriceSeries]) -> Vec<Quote> {
    series
        .iter()
        .enumerate()
        .filter_map(|(i, s)| {
            let snapshot = summarize(s)?;
            Some(Quote {
                symbol: snapshot.symbol.unwrap_or_else(|| format!("#{i}")),
                price: snapshot.current_price,
                change_pct: snapshot.change_pct,
                volume: snapshot.volume,
            })
        })
        .collect()
}
