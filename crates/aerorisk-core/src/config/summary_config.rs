//! Summarizer configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CUTOFF_PERCENTILE, DEFAULT_HISTOGRAM_BINS};

/// Rule for the histogram's upper bound. The lower bound is always 0.
///
/// Values above the cutoff are counted in the last bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum HistogramCutoff {
    /// The sample maximum.
    Maximum,
    /// A quantile of the field, e.g. 0.99. Keeps a single outlier from
    /// stretching the axis.
    Percentile { quantile: f64 },
    /// A caller-chosen bound, used to put several histograms on one axis.
    Fixed { value: f64 },
}

impl Default for HistogramCutoff {
    fn default() -> Self {
        Self::Percentile {
            quantile: DEFAULT_CUTOFF_PERCENTILE,
        }
    }
}

/// Configuration for summaries and histograms.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SummaryConfig {
    /// Histogram bin count. Default: 40.
    pub histogram_bins: Option<usize>,
    /// Histogram cutoff rule. Default: 99th percentile.
    pub cutoff: Option<HistogramCutoff>,
}

impl SummaryConfig {
    pub fn effective_histogram_bins(&self) -> usize {
        self.histogram_bins.unwrap_or(DEFAULT_HISTOGRAM_BINS)
    }

    pub fn effective_cutoff(&self) -> HistogramCutoff {
        self.cutoff.unwrap_or_default()
    }
}
