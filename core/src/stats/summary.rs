//! Descriptive statistics over one sample of durations.
//!
//! Every statistic is rounded to three decimals on its own, half away
//! from zero, so rows built from the same sample are bit-identical.

use serde::Serialize;

/// One report row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRow {
    pub label: String,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

/// Round to three decimal places, half away from zero.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Reduce a sample to a row. Returns `None` for an empty sample.
pub fn compute_row(label: impl Into<String>, sample: &[f64]) -> Option<StatRow> {
    if sample.is_empty() {
        return None;
    }

    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;

    Some(StatRow {
        label: label.into(),
        count,
        min: round3(sorted[0]),
        max: round3(sorted[count - 1]),
        mean: round3(mean),
        median: round3(median_sorted(&sorted)),
        p90: round3(percentile_sorted(&sorted, 90.0)),
        p95: round3(percentile_sorted(&sorted, 95.0)),
        p99: round3(percentile_sorted(&sorted, 99.0)),
    })
}

/// Median; the mean of the two middle values for even-sized samples.
pub fn median(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    median_sorted(&sorted)
}

/// Compute a single percentile from samples
///
/// Ordinal rank `p/100 * n`: a whole rank picks that order statistic,
/// a fractional one averages the two ranks around it.
pub fn compute_percentile(samples: &[f64], percentile: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    percentile_sorted(&sorted, percentile)
}

fn median_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn percentile_sorted(sorted: &[f64], percentile: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = percentile.clamp(0.0, 100.0) / 100.0 * n as f64;
    if rank < 1.0 {
        return sorted[0];
    }

    let idx = rank as usize;
    if rank.fract() == 0.0 {
        sorted[idx - 1]
    } else {
        (sorted[idx - 1] + sorted[idx]) / 2.0
    }
}
