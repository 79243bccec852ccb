//! Numeric helpers for the forecaster
//!
//! Small, allocation-light functions over monthly totals: smoothing, least
//! squares slope, recency weighting and dispersion.

use super::types::Trend;

/// Arithmetic mean, 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Trailing moving average
///
/// Element `i` is the mean of `values[i + 1 - window..=i]`, clipped at the start,
/// so early elements average over fewer values. Never looks ahead.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            mean(&values[start..=i])
        })
        .collect()
}

/// Ordinary least squares slope of value against index (0..n)
///
/// Returns `None` with fewer than two points.
pub fn linear_slope(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let n = values.len() as f64;
    let sum_x: f64 = (0..values.len()).map(|i| i as f64).sum();
    let sum_y: f64 = values.iter().sum();
    let sum_xy: f64 = values.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();
    let sum_xx: f64 = (0..values.len()).map(|i| (i * i) as f64).sum();

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }

    Some((n * sum_xy - sum_x * sum_y) / denominator)
}

/// Classify the direction of a series by its regression slope
pub fn calculate_trend(values: &[f64], slope_threshold: f64) -> Trend {
    match linear_slope(values) {
        Some(slope) => Trend::from_threshold(slope, slope_threshold),
        None => Trend::Stable,
    }
}

/// Weighted average of the last `months` values
///
/// Weights line up with the slice earliest-first; positions past the end of
/// `weights` use `fallback`. Returns `None` if nothing carries weight.
pub fn weighted_recent_average(
    values: &[f64],
    months: usize,
    weights: &[f64],
    fallback: f64,
) -> Option<f64> {
    let start = values.len().saturating_sub(months);
    let recent = &values[start..];

    let (weighted_sum, total_weight) =
        recent
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(sum, total), (i, &amount)| {
                let weight = weights.get(i).copied().unwrap_or(fallback);
                (sum + amount * weight, total + weight)
            });

    if total_weight == 0.0 {
        return None;
    }
    Some(weighted_sum / total_weight)
}

/// Population standard deviation
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    let variance =
        values.iter().map(|v| (v - avg) * (v - avg)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Standard deviation relative to the mean
///
/// A zero mean divides by 1 instead.
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let avg = mean(values);
    let divisor = if avg == 0.0 { 1.0 } else { avg };
    std_dev(values) / divisor
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
