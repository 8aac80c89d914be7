//! Configuration system for aerorisk.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod engine_config;
pub mod simulation_config;
pub mod summary_config;

pub use engine_config::{CliOverrides, EngineConfig};
pub use simulation_config::SimulationConfig;
pub use summary_config::{HistogramCutoff, SummaryConfig};
