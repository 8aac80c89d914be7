//! Error handling for aerorisk.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod simulation_error;
pub mod summary_error;

pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use error_code::RiskErrorCode;
pub use simulation_error::SimulationError;
pub use summary_error::SummaryError;
