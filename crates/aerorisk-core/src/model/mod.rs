//! Scenario data model: parameter ranges, model variants, and the scenario
//! configuration consumed by the sampler.

pub mod range;
pub mod scenario;
pub mod variants;

pub use range::ParameterRange;
pub use scenario::ScenarioConfig;
pub use variants::{CombinationRule, EmissionModel, Role};
