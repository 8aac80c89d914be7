//! Equal-width histograms anchored at zero.

use serde::{Deserialize, Serialize};

/// Histogram over `[0, upper]` with equal-width bins.
///
/// Values at or above `upper` land in the last bin, so `counts` always sums to
/// `total`. A zero `upper` collapses every value into bin 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub upper: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
    pub total: usize,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins over `[0, upper]`.
    /// `bins` of zero is treated as 1.
    pub fn build(values: &[f64], bins: usize, upper: f64) -> Self {
        let bins = bins.max(1);
        let upper = if upper.is_finite() && upper > 0.0 { upper } else { 0.0 };
        let bin_width = upper / bins as f64;
        let mut counts = vec![0usize; bins];

        for &v in values {
            let idx = if bin_width > 0.0 {
                // Negative and NaN cast to 0; overflow saturates.
                ((v / bin_width) as usize).min(bins - 1)
            } else {
                0
            };
            counts[idx] += 1;
        }

        Self {
            upper,
            bin_width,
            counts,
            total: values.len(),
        }
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Share of rows per bin, in percent. Sums to 100 for a non-empty histogram.
    pub fn percentages(&self) -> Vec<f64> {
        if self.total == 0 {
            return vec![0.0; self.counts.len()];
        }
        let total = self.total as f64;
        self.counts
            .iter()
            .map(|&c| c as f64 * 100.0 / total)
            .collect()
    }
}
