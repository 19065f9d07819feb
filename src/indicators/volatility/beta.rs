//! Beta against a benchmark series

use crate::common::math;
use crate::models::indicators::Candle;
use std::cmp::Ordering;

/// Closes of both series on the timestamps they share, in time order.
///
/// Both inputs must be sorted ascending, which `PriceSeries` guarantees.
pub fn aligned_closes(asset: &[Candle], benchmark: &[Candle]) -> (Vec<f64>, Vec<f64>) {
    let mut asset_closes = Vec::new();
    let mut benchmark_closes = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < asset.len() && j < benchmark.len() {
        match asset[i].timestamp.cmp(&benchmark[j].timestamp) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                asset_closes.push(asset[i].close);
                benchmark_closes.push(benchmark[j].close);
                i += 1;
                j += 1;
            }
        }
    }

    (asset_closes, benchmark_closes)
}

/// cov(asset, benchmark) / var(benchmark) over returns on common timestamps.
///
/// `None` when fewer than two paired returns exist or the benchmark does not
/// move.
pub fn calculate_beta(asset: &[Candle], benchmark: &[Candle]) -> Option<f64> {
    let (asset_closes, benchmark_closes) = aligned_closes(asset, benchmark);

    // Returns are paired, so a zero close on either side drops the pair.
    let (asset_returns, benchmark_returns): (Vec<f64>, Vec<f64>) = asset_closes
        .windows(2)
        .zip(benchmark_closes.windows(2))
        .filter(|(a, b)| a[0] != 0.0 && b[0] != 0.0)
        .map(|(a, b)| ((a[1] - a[0]) / a[0], (b[1] - b[0]) / b[0]))
        .unzip();

    let variance = math::sample_variance(&benchmark_returns)?;
    if variance == 0.0 {
        return None;
    }
    let covariance = math::sample_covariance(&asset_returns, &benchmark_returns)?;
    Some(covariance / variance)
}
