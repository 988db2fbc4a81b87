//! Robust averaging for sensor batches.
//!
//! Pure logic — the caller extracts the per-field values and passes them
//! in. Outlier rejection uses the median absolute deviation so a bounded
//! fraction of extreme readings cannot drag the average.

use std::cmp::Ordering;

/// Scale factor that makes the MAD a consistent estimator of the standard
/// deviation under normality.
const MAD_SIGMA_SCALE: f64 = 1.4826;

/// Outlier-rejection parameters for [`robust_mean`].
#[derive(Debug, Clone, Copy)]
pub struct OutlierParams {
    /// Values further than `k_outlier * sigma` from the median are flagged
    /// as outliers.
    pub k_outlier: f64,
    /// Maximum fraction of the batch that may be excluded as outliers.
    /// If more values are flagged than this, the flag is not trusted and
    /// all values are retained. The boundary is inclusive.
    pub max_frac: f64,
}

impl Default for OutlierParams {
    fn default() -> Self {
        Self {
            k_outlier: 3.5,
            max_frac: 0.05,
        }
    }
}

/// Median of a set of values. Returns NaN for an empty input.
fn median(mut values: Vec<f64>) -> f64 {
    let n = values.len();
    if n == 0 {
        return f64::NAN;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    if n % 2 == 0 {
        (values[n / 2 - 1] + values[n / 2]) * 0.5
    } else {
        values[n / 2]
    }
}

/// Arithmetic mean of a non-empty slice.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Outlier-resistant average of a sequence of readings.
///
/// Returns NaN when `values` is empty. When the MAD is zero (no
/// dispersion) the median is returned directly — there is nothing to
/// filter and the sigma estimate would be degenerate.
pub fn robust_mean(values: &[f64], params: OutlierParams) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    let med = median(values.to_vec());
    let mad = median(values.iter().map(|v| (v - med).abs()).collect());
    if mad == 0.0 {
        return med;
    }

    let sigma = MAD_SIGMA_SCALE * mad;
    let cutoff = params.k_outlier * sigma;
    let retained: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| (v - med).abs() <= cutoff)
        .collect();

    let flagged = values.len() - retained.len();
    if flagged as f64 / values.len() as f64 <= params.max_frac {
        mean(&retained)
    } else {
        mean(values)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
