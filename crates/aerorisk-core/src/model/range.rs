use serde::{Deserialize, Serialize};

use crate::constants::{LOG_NORMAL_TAIL_SIGMAS, MAX_LOG10_EMISSION};
use crate::errors::SimulationError;

/// A `(low, high)` pair describing one uncertain quantity.
///
/// Read as the bounds of a uniform distribution, or, for emission rates under
/// [`EmissionModel::LogNormal`](super::EmissionModel::LogNormal), as the
/// `(mean, std_dev)` of a normal distribution in log10 space.
///
/// Deserializes from either `{ low = 2.0, high = 4.0 }` or `[2.0, 4.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub low: f64,
    pub high: f64,
}

impl ParameterRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// A zero-width range: every sample equals `value`.
    pub const fn fixed(value: f64) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    /// Log10-space mean, when the range is read as log-normal parameters.
    pub fn log_mean(&self) -> f64 {
        self.low
    }

    /// Log10-space standard deviation, when the range is read as log-normal parameters.
    pub fn log_std_dev(&self) -> f64 {
        self.high
    }

    /// Check the range as uniform bounds: finite and `low <= high`.
    pub fn check_uniform(&self, field: &str) -> Result<(), SimulationError> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(SimulationError::invalid(field, "bounds must be finite"));
        }
        if self.low > self.high {
            return Err(SimulationError::invalid(
                field,
                format!("low {} exceeds high {}", self.low, self.high),
            ));
        }
        Ok(())
    }

    /// Check the range as uniform bounds contained in `[min, max]`.
    pub fn check_within(&self, field: &str, min: f64, max: f64) -> Result<(), SimulationError> {
        self.check_uniform(field)?;
        if self.low < min || self.high > max {
            return Err(SimulationError::invalid(
                field,
                format!(
                    "range [{}, {}] must lie within [{}, {}]",
                    self.low, self.high, min, max
                ),
            ));
        }
        Ok(())
    }

    /// Check the range as log10-normal parameters: finite mean, finite
    /// non-negative std-dev, and an upper tail `mean + 8·sd` whose power of
    /// ten is still a finite f64.
    pub fn check_log_normal(&self, field: &str) -> Result<(), SimulationError> {
        let mean = self.log_mean();
        if !mean.is_finite() {
            return Err(SimulationError::invalid(field, "log10 mean must be finite"));
        }
        let sd = self.log_std_dev();
        if !sd.is_finite() || sd < 0.0 {
            return Err(SimulationError::invalid(
                field,
                format!("log10 std-dev must be finite and non-negative, got {sd}"),
            ));
        }
        let tail = mean + LOG_NORMAL_TAIL_SIGMAS * sd;
        if tail > MAX_LOG10_EMISSION {
            return Err(SimulationError::invalid(
                field,
                format!(
                    "log10 mean + {LOG_NORMAL_TAIL_SIGMAS}·sd = {tail} exceeds {MAX_LOG10_EMISSION}"
                ),
            ));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for ParameterRange {
    fn from((low, high): (f64, f64)) -> Self {
        Self::new(low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_range_is_valid_uniform() {
        let r = ParameterRange::fixed(0.0);
        assert_eq!(r.low, r.high);
        assert!(r.check_uniform("additional_control").is_ok());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = ParameterRange::new(4.0, 2.0).check_uniform("ventilation").unwrap_err();
        assert!(err.to_string().contains("ventilation"));
    }

    #[test]
    fn nan_bound_is_rejected() {
        assert!(ParameterRange::new(f64::NAN, 1.0).check_uniform("decay").is_err());
    }

    #[test]
    fn fraction_outside_unit_interval_is_rejected() {
        let r = ParameterRange::new(0.5, 1.2);
        assert!(r.check_within("exhalation_efficiency", 0.0, 1.0).is_err());
    }

    #[test]
    fn log_normal_accepts_mean_above_std_dev() {
        // (1.5, 0.71) would be "inverted" as uniform bounds but is a valid log-normal pair.
        let r = ParameterRange::new(1.5, 0.71);
        assert!(r.check_log_normal("emission_faculty").is_ok());
        assert!(r.check_uniform("emission_faculty").is_err());
    }

    #[test]
    fn log_normal_rejects_overflowing_tail() {
        assert!(ParameterRange::new(400.0, 0.0).check_log_normal("emission_faculty").is_err());
        assert!(ParameterRange::new(290.0, 2.0).check_log_normal("emission_faculty").is_err());
        assert!(ParameterRange::new(290.0, 1.0).check_log_normal("emission_faculty").is_ok());
    }

    #[test]
    fn log_normal_rejects_negative_std_dev() {
        assert!(ParameterRange::new(1.0, -0.1).check_log_normal("emission_student").is_err());
    }
}
