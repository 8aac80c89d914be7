//! SimulationEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing a simulation run.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about. `Send + Sync` because the
/// sampler fans out across rayon workers.
pub trait SimulationEventHandler: Send + Sync {
    fn on_simulation_started(&self, _event: &SimulationStartedEvent) {}
    fn on_rows_resampled(&self, _event: &RowsResampledEvent) {}
    fn on_simulation_complete(&self, _event: &SimulationCompleteEvent) {}
}

/// Handler that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpHandler;

impl SimulationEventHandler for NoOpHandler {}
