//! Sampler configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_MAX_RESAMPLE_ATTEMPTS, DEFAULT_SAMPLE_COUNT};

/// Configuration for the Monte Carlo sampler.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Rows per run. Default: 10,000.
    pub sample_count: Option<usize>,
    /// Fixed RNG seed. Unset ⇒ a fresh seed per run, recorded on the population.
    pub seed: Option<u64>,
    /// Redraws allowed for a row with a degenerate removal rate. Default: 100.
    pub max_resample_attempts: Option<u32>,
    /// Rows per RNG stream. Default: 1024.
    pub chunk_size: Option<usize>,
}

impl SimulationConfig {
    pub fn effective_sample_count(&self) -> usize {
        self.sample_count.unwrap_or(DEFAULT_SAMPLE_COUNT)
    }

    pub fn effective_max_resample_attempts(&self) -> u32 {
        self.max_resample_attempts.unwrap_or(DEFAULT_MAX_RESAMPLE_ATTEMPTS)
    }

    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE)
    }
}
