//! Window statistics: mean, population standard deviation and MAD.
//!
//! All functions operate on plain slices. Non-finite samples are not
//! filtered: they propagate into the results, which are then NaN or
//! infinite. Empty input yields NaN.

use serde::{Deserialize, Serialize};

/// Summary statistics of one full window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowStatistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation (divides by `n`).
    pub std_dev: f64,
    /// Median absolute deviation from the window median.
    pub mad: f64,
}

impl WindowStatistics {
    /// Compute statistics, reusing `values` as scratch space.
    ///
    /// `values` must be in arrival order on entry; on return it holds the
    /// sorted absolute deviations.
    pub(crate) fn compute_in_place(values: &mut [f64]) -> Self {
        let mean = mean(values);
        let std_dev = population_std_dev(values, mean);
        let mad = median_absolute_deviation(values);
        Self { mean, std_dev, mad }
    }

    /// Distance of `sample` from the mean in standard deviations.
    ///
    /// A window with zero (or undefined) spread has no meaningful z-score;
    /// it is reported as `0.0` so the sample is treated as baseline.
    pub fn z_score(&self, sample: f64) -> f64 {
        if self.std_dev > 0.0 {
            (sample - self.mean) / self.std_dev
        } else {
            0.0
        }
    }

    /// Cutoff the z-score must exceed for the sample to be anomalous.
    ///
    /// Heuristic, not a statistically derived bound: the baseline is raised
    /// by `mad / std_dev`. Clustered windows disturbed by a few heavy
    /// outliers have a large MAD relative to their deviation and get a higher
    /// cutoff; windows whose spread is driven by outliers keep a cutoff close
    /// to the baseline.
    pub fn dynamic_threshold(&self, threshold: f64) -> f64 {
        if self.std_dev > 0.0 {
            threshold + self.mad / self.std_dev
        } else {
            threshold
        }
    }
}

/// Arithmetic mean, accumulated as offsets from the first sample.
///
/// A window of identical samples yields exactly that sample, so its spread
/// is exactly zero.
fn mean(samples: &[f64]) -> f64 {
    let Some(&first) = samples.first() else {
        return f64::NAN;
    };
    let offset = samples.iter().map(|x| x - first).sum::<f64>() / samples.len() as f64;
    first + offset
}

/// Population standard deviation around a precomputed `mean`.
fn population_std_dev(samples: &[f64], mean: f64) -> f64 {
    let variance = samples
        .iter()
        .map(|x| {
            let d = x - mean;
            d * d
        })
        .sum::<f64>()
        / samples.len() as f64;
    variance.sqrt()
}

/// Median of `values`, sorting them in place.
///
/// Even-length input averages the two middle elements.
fn median(values: &mut [f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return f64::NAN;
    }
    values.sort_unstable_by(f64::total_cmp);
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}

/// Median of absolute deviations from the median, overwriting `values`.
fn median_absolute_deviation(values: &mut [f64]) -> f64 {
    let center = median(values);
    for v in values.iter_mut() {
        *v = (*v - center).abs();
    }
    median(values)
}
