//! # aerorisk-core
//!
//! Foundation crate for the aerorisk classroom exposure engine.
//! Defines the scenario model, errors, config, events, tracing, and constants.
//! The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod model;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{ConfigError, EngineError, SimulationError, SummaryError};
pub use model::{CombinationRule, EmissionModel, ParameterRange, ScenarioConfig};
