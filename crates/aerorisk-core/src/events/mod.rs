//! Event system for aerorisk.
//! Trait with no-op defaults, synchronous dispatch.

pub mod handler;
pub mod types;

pub use handler::{NoOpHandler, SimulationEventHandler};
pub use types::*;
