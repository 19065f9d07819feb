//! Numeric kernels shared by the indicator modules.
//!
//! Series helpers return a vector aligned with their input: element `i` is the
//! value ending at input index `i`, or `None` while the window is warming up.

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Simple moving average of the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    mean(&values[values.len() - period..])
}

pub fn sma_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    for (offset, window) in values.windows(period).enumerate() {
        out[offset + period - 1] = mean(window);
    }
    out
}

/// Smoothing factor for an EMA of the given period.
fn ema_alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// One EMA step.
fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let alpha = ema_alpha(period);
    alpha * value + (1.0 - alpha) * previous
}

/// EMA seeded with the SMA of the first `period` values.
pub fn ema_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    let Some(seed) = mean(&values[..period]) else {
        return out;
    };
    let mut current = seed;
    out[period - 1] = Some(current);
    for (i, &value) in values.iter().enumerate().skip(period) {
        current = ema_from_previous(value, current, period);
        out[i] = Some(current);
    }
    out
}

/// EMA over a series that is itself warming up: leading `None`s are skipped
/// and the result stays aligned with the input.
pub fn ema_series_sparse(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    let Some(start) = values.iter().position(Option::is_some) else {
        return out;
    };
    let dense: Vec<f64> = values[start..].iter().map_while(|v| *v).collect();
    for (offset, value) in ema_series(&dense, period).into_iter().enumerate() {
        out[start + offset] = value;
    }
    out
}

/// Wilder smoothing seeded with the simple mean of the first `period` values.
pub fn wilder_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    let Some(mut current) = mean(&values[..period]) else {
        return out;
    };
    let n = period as f64;
    out[period - 1] = Some(current);
    for (i, &value) in values.iter().enumerate().skip(period) {
        current = (current * (n - 1.0) + value) / n;
        out[i] = Some(current);
    }
    out
}

/// Sample variance (divides by n - 1); needs at least two values.
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let avg = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    Some(sum_sq / (values.len() - 1) as f64)
}

pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Sample covariance; both slices must have the same length of at least two.
pub fn sample_covariance(a: &[f64], b: &[f64]) -> Option<f64> {
    if a.len() != b.len() || a.len() < 2 {
        return None;
    }
    let mean_a = mean(a)?;
    let mean_b = mean(b)?;
    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| (x - mean_a) * (y - mean_b))
        .sum();
    Some(sum / (a.len() - 1) as f64)
}

/// True range given the previous close.
pub fn true_range(high: f64, low: f64, previous_close: f64) -> f64 {
    (high - low)
        .max((high - previous_close).abs())
        .max((low - previous_close).abs())
}

/// Fractional change between consecutive values. Pairs whose first value is
/// zero have no defined return and are skipped.
pub fn pct_returns(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect()
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
