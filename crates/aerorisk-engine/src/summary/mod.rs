//! Reducing a population column to mean, quantiles, and a histogram.

pub mod histogram;
pub mod stats;

pub use histogram::Histogram;

use aerorisk_core::config::{HistogramCutoff, SummaryConfig};
use aerorisk_core::constants::{DEFAULT_HISTOGRAM_BINS, QUANTILE_LADDER};
use aerorisk_core::errors::SummaryError;
use aerorisk_core::model::Role;
use aerorisk_core::tracing::metrics::SUMMARIZE_SPAN;
use serde::{Deserialize, Serialize};

use crate::outcome::{OutcomeField, OutcomePopulation};

/// Histogram layout for a summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryOptions {
    pub bins: usize,
    pub cutoff: HistogramCutoff,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            bins: DEFAULT_HISTOGRAM_BINS,
            cutoff: HistogramCutoff::default(),
        }
    }
}

impl From<&SummaryConfig> for SummaryOptions {
    fn from(config: &SummaryConfig) -> Self {
        Self {
            bins: config.effective_histogram_bins(),
            cutoff: config.effective_cutoff(),
        }
    }
}

/// One point on the quantile ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantile {
    pub p: f64,
    pub value: f64,
}

/// Distribution summary of one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistic {
    pub field: OutcomeField,
    pub count: usize,
    pub mean: f64,
    pub quantiles: Vec<Quantile>,
    pub histogram: Histogram,
}

impl SummaryStatistic {
    /// Ladder value at `p`, if `p` is on the ladder.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        self.quantiles
            .iter()
            .find(|q| (q.p - p).abs() < 1e-12)
            .map(|q| q.value)
    }

    pub fn median(&self) -> Option<f64> {
        self.quantile(0.5)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Faculty and student semester summaries drawn on a shared x-axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSummaries {
    pub faculty: SummaryStatistic,
    pub student: SummaryStatistic,
}

impl RoleSummaries {
    pub fn get(&self, role: Role) -> &SummaryStatistic {
        match role {
            Role::Faculty => &self.faculty,
            Role::Student => &self.student,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Summarize `field` with the default 40-bin, 99th-percentile histogram.
pub fn summarize(
    population: &OutcomePopulation,
    field: &str,
) -> Result<SummaryStatistic, SummaryError> {
    summarize_with(population, field, &SummaryOptions::default())
}

/// Summarize `field` with explicit histogram options.
pub fn summarize_with(
    population: &OutcomePopulation,
    field: &str,
    options: &SummaryOptions,
) -> Result<SummaryStatistic, SummaryError> {
    let field: OutcomeField = field.parse()?;
    summarize_field(population, field, options)
}

/// Summarize an already-resolved field.
pub fn summarize_field(
    population: &OutcomePopulation,
    field: OutcomeField,
    options: &SummaryOptions,
) -> Result<SummaryStatistic, SummaryError> {
    let column = Column::new(population, field)?;
    let cutoff = column.cutoff(options.cutoff);
    Ok(column.into_statistic(options.bins, cutoff))
}

/// Summarize both semester fields with one histogram cutoff: the larger of
/// the two roles' cutoffs under `options.cutoff`.
pub fn summarize_roles(
    population: &OutcomePopulation,
    options: &SummaryOptions,
) -> Result<RoleSummaries, SummaryError> {
    let faculty = Column::new(population, OutcomeField::semester(Role::Faculty))?;
    let student = Column::new(population, OutcomeField::semester(Role::Student))?;
    let shared = faculty
        .cutoff(options.cutoff)
        .max(student.cutoff(options.cutoff));

    Ok(RoleSummaries {
        faculty: faculty.into_statistic(options.bins, shared),
        student: student.into_statistic(options.bins, shared),
    })
}

/// A field's values in row order and sorted order.
struct Column {
    field: OutcomeField,
    values: Vec<f64>,
    sorted: Vec<f64>,
}

impl Column {
    fn new(population: &OutcomePopulation, field: OutcomeField) -> Result<Self, SummaryError> {
        if population.is_empty() {
            return Err(SummaryError::EmptyPopulation);
        }
        let values = population.column(field);
        let sorted = stats::sorted(&values);
        Ok(Self {
            field,
            values,
            sorted,
        })
    }

    fn cutoff(&self, rule: HistogramCutoff) -> f64 {
        match rule {
            HistogramCutoff::Maximum => self.sorted[self.sorted.len() - 1],
            HistogramCutoff::Percentile { quantile } => {
                stats::quantile_sorted(&self.sorted, quantile)
            }
            HistogramCutoff::Fixed { value } => value,
        }
    }

    fn into_statistic(self, bins: usize, cutoff: f64) -> SummaryStatistic {
        let _span = tracing::debug_span!(SUMMARIZE_SPAN, field = %self.field).entered();
        let mean = stats::mean(&self.values);
        let quantiles = QUANTILE_LADDER
            .iter()
            .map(|&p| Quantile {
                p,
                value: stats::quantile_sorted(&self.sorted, p),
            })
            .collect();
        let histogram = Histogram::build(&self.values, bins, cutoff);

        tracing::debug!(
            count = self.values.len(),
            mean,
            cutoff = histogram.upper,
            "summarized field"
        );

        SummaryStatistic {
            field: self.field,
            count: self.values.len(),
            mean,
            quantiles,
            histogram,
        }
    }
}
