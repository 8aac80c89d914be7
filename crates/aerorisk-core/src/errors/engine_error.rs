//! Aggregate error for callers that drive the whole pipeline.

use super::error_code::RiskErrorCode;
use super::{ConfigError, SimulationError, SummaryError};

/// Errors that can occur anywhere between loading config and summarizing.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    #[error("Summary error: {0}")]
    Summary(#[from] SummaryError),
}

impl RiskErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Simulation(e) => e.error_code(),
            Self::Summary(e) => e.error_code(),
        }
    }
}
