//! Precomputed summaries for the default scenario.
//!
//! The dashboard opens on a default classroom. Instead of a process-wide
//! cached population, the result is an immutable value built on demand and
//! shared through `Arc`.

use std::sync::{Arc, OnceLock};

use aerorisk_core::config::EngineConfig;
use aerorisk_core::errors::EngineError;
use aerorisk_core::model::ScenarioConfig;

use crate::pipeline::evaluate;
use crate::summary::RoleSummaries;

/// Role summaries for the configured default scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultView {
    pub scenario: ScenarioConfig,
    pub rows: usize,
    pub seed: u64,
    pub summaries: RoleSummaries,
}

impl DefaultView {
    /// Simulate and summarize `config.effective_scenario()`.
    pub fn build(config: &EngineConfig) -> Result<Arc<Self>, EngineError> {
        let scenario = config.effective_scenario();
        let (summaries, seed) = evaluate(&scenario, config)?;
        tracing::info!(seed, "default view built");
        Ok(Arc::new(Self {
            scenario,
            rows: config.simulation.effective_sample_count(),
            seed,
            summaries,
        }))
    }
}

/// Builds a [`DefaultView`] on first access and hands out the same `Arc`
/// afterwards. A failed build is not cached; the next call retries.
#[derive(Debug)]
pub struct LazyDefaultView {
    config: EngineConfig,
    cell: OnceLock<Arc<DefaultView>>,
}

impl LazyDefaultView {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            cell: OnceLock::new(),
        }
    }

    pub fn get(&self) -> Result<Arc<DefaultView>, EngineError> {
        if let Some(view) = self.cell.get() {
            return Ok(Arc::clone(view));
        }
        let view = DefaultView::build(&self.config)?;
        // A concurrent caller may have won the race; keep whichever landed first.
        Ok(Arc::clone(self.cell.get_or_init(|| view)))
    }

    pub fn is_built(&self) -> bool {
        self.cell.get().is_some()
    }
}
