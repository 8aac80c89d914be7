//! One-call evaluation: simulate a scenario and summarize both roles.

use aerorisk_core::config::EngineConfig;
use aerorisk_core::errors::EngineError;
use aerorisk_core::model::ScenarioConfig;

use crate::simulator::Simulator;
use crate::summary::{summarize_roles, RoleSummaries, SummaryOptions};

/// Run `scenario` under the sampler and summary settings in `config`.
///
/// Returns the role summaries together with the seed used, so a caller can
/// replay the exact population later. The population itself is dropped.
pub fn evaluate(
    scenario: &ScenarioConfig,
    config: &EngineConfig,
) -> Result<(RoleSummaries, u64), EngineError> {
    let population = Simulator::from_config(&config.simulation)
        .run(scenario, config.simulation.effective_sample_count())?;
    let summaries = summarize_roles(&population, &SummaryOptions::from(&config.summary))?;
    Ok((summaries, population.seed()))
}
