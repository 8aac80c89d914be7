//! Sampler/propagator errors.

use super::error_code::{self, RiskErrorCode};

/// Errors raised by `simulate`. Either the whole population is produced or
/// one of these is returned; there is no partial result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("Invalid configuration for {field}: {message}")]
    InvalidConfiguration { field: String, message: String },

    #[error(
        "Removal rate stayed degenerate (L = {removal_rate}) for row {row} after {attempts} redraws"
    )]
    NumericDegeneracy {
        row: usize,
        attempts: u32,
        removal_rate: f64,
    },

    #[error("Non-finite {quantity} ({value}) in row {row}")]
    NonFiniteOutcome {
        row: usize,
        quantity: String,
        value: f64,
    },
}

impl SimulationError {
    /// Shorthand for an `InvalidConfiguration` error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl RiskErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { .. } => error_code::INVALID_CONFIGURATION,
            Self::NumericDegeneracy { .. } | Self::NonFiniteOutcome { .. } => {
                error_code::NUMERIC_DEGENERACY
            }
        }
    }
}
