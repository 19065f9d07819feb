//! Support and resistance detection from local extrema
//!
//! A bar is a local minimum when its value is strictly below every other
//! value within `order` bars on each side, and a local maximum when strictly
//! above. Only bars with a full window on both sides qualify, so equal
//! neighbours (plateaus) never produce a level.

use crate::config::ExtremaSource;
use crate::models::indicators::Candle;
use crate::models::levels::{LevelSet, PriceLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extremum {
    Minimum,
    Maximum,
}

fn local_extrema(values: &[f64], order: usize, kind: Extremum) -> Vec<usize> {
    if order == 0 || values.len() < 2 * order + 1 {
        return Vec::new();
    }

    (order..values.len() - order)
        .filter(|&i| {
            let value = values[i];
            (i - order..=i + order).filter(|&j| j != i).all(|j| match kind {
                Extremum::Minimum => value < values[j],
                Extremum::Maximum => value > values[j],
            })
        })
        .collect()
}

/// Indices of strict local minima.
pub fn find_local_minima(values: &[f64], order: usize) -> Vec<usize> {
    local_extrema(values, order, Extremum::Minimum)
}

/// Indices of strict local maxima.
pub fn find_local_maxima(values: &[f64], order: usize) -> Vec<usize> {
    local_extrema(values, order, Extremum::Maximum)
}

/// Percentage distance of `level` from `price`; `None` for a zero price.
pub fn distance_pct(level: f64, price: f64) -> Option<f64> {
    if price == 0.0 {
        return None;
    }
    Some((level - price).abs() / price * 100.0)
}

fn rank_levels(
    candles: &[Candle],
    values: &[f64],
    indices: &[usize],
    current_price: f64,
    keep: impl Fn(f64) -> bool,
    max_levels: usize,
) -> Vec<PriceLevel> {
    let mut candidates: Vec<(usize, f64)> = indices
        .iter()
        .map(|&i| (i, values[i]))
        .filter(|&(_, price)| keep(price))
        .collect();

    // Nearest first; among equal prices keep the most recent bar.
    candidates.sort_by(|a, b| {
        let da = (a.1 - current_price).abs();
        let db = (b.1 - current_price).abs();
        da.total_cmp(&db).then(b.0.cmp(&a.0))
    });
    candidates.dedup_by(|a, b| a.1 == b.1);

    candidates
        .into_iter()
        .take(max_levels)
        .map(|(i, price)| PriceLevel {
            price,
            timestamp: candles[i].timestamp,
            distance_pct: distance_pct(price, current_price),
        })
        .collect()
}

/// Detect support below and resistance above the latest close.
///
/// A level at exactly the latest close is on neither side.
/// An empty or short series yields an empty `LevelSet`.
pub fn calculate_support_resistance(
    candles: &[Candle],
    order: u32,
    source: ExtremaSource,
    max_levels: usize,
) -> LevelSet {
    let Some(current_price) = candles.last().map(|c| c.close) else {
        return LevelSet::default();
    };

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let (support_values, resistance_values) = match source {
        ExtremaSource::Close => (closes.clone(), closes),
        ExtremaSource::HighLow => (
            candles.iter().map(|c| c.low).collect(),
            candles.iter().map(|c| c.high).collect(),
        ),
    };

    let order = order as usize;
    let minima = find_local_minima(&support_values, order);
    let maxima = find_local_maxima(&resistance_values, order);

    let support_levels = rank_levels(
        candles,
        &support_values,
        &minima,
        current_price,
        |price| price < current_price,
        max_levels,
    );
    let resistance_levels = rank_levels(
        candles,
        &resistance_values,
        &maxima,
        current_price,
        |price| price > current_price,
        max_levels,
    );

    let nearest_support = support_levels.first().map(|l| l.price);
    let nearest_resistance = resistance_levels.first().map(|l| l.price);

    LevelSet {
        symbol: None,
        current_price: Some(current_price),
        nearest_support,
        nearest_resistance,
        distance_to_support_pct: support_levels.first().and_then(|l| l.distance_pct),
        distance_to_resistance_pct: resistance_levels.first().and_then(|l| l.distance_pct),
        support_levels,
        resistance_levels,
    }
}
