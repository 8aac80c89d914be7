//! Summarizer errors.

use super::error_code::{self, RiskErrorCode};

/// Errors raised by `summarize`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummaryError {
    #[error("Unknown outcome field: {name}")]
    UnknownField { name: String },

    #[error("Cannot summarize an empty population")]
    EmptyPopulation,
}

impl RiskErrorCode for SummaryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownField { .. } => error_code::UNKNOWN_FIELD,
            Self::EmptyPopulation => error_code::EMPTY_POPULATION,
        }
    }
}
