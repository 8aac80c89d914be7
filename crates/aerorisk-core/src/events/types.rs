//! Event payloads.

/// Payload for `on_simulation_started`.
#[derive(Debug, Clone)]
pub struct SimulationStartedEvent {
    pub rows: usize,
    pub seed: u64,
}

/// Payload for `on_rows_resampled`. Emitted once per run, only when at least
/// one row had a degenerate removal rate redrawn.
#[derive(Debug, Clone)]
pub struct RowsResampledEvent {
    pub rows_resampled: usize,
    pub total_redraws: u64,
}

/// Payload for `on_simulation_complete`.
#[derive(Debug, Clone)]
pub struct SimulationCompleteEvent {
    pub rows: usize,
    pub seed: u64,
    pub duration_ms: u64,
}
