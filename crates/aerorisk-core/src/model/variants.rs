//! Tagged model variants that select between the emission and
//! dose-combination formulations.

use serde::{Deserialize, Serialize};

/// How the per-role emission ranges are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionModel {
    /// Emission ranges are uniform bounds in quanta/hour.
    #[default]
    Uniform,
    /// Emission ranges are `(mean, std_dev)` of log10(quanta/hour).
    LogNormal,
}

impl EmissionModel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::LogNormal => "log_normal",
        }
    }
}

impl std::fmt::Display for EmissionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How doses from several emitters are turned into one receiver probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinationRule {
    /// Population-total model. Each role's concentration is scaled by its
    /// head-count and infectious fraction, doses are pooled, and one
    /// dose-response is applied per session.
    PerClass,
    /// Per-capita model. Each emitter is an independent source with
    /// probability `fraction × (1 − e^(−dose))`; sources combine as
    /// `1 − Π(1 − p_i)`.
    #[default]
    IndependentSources,
}

impl CombinationRule {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PerClass => "per_class",
            Self::IndependentSources => "independent_sources",
        }
    }
}

impl std::fmt::Display for CombinationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Occupant roles in the classroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Faculty,
    Student,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Faculty => "faculty",
            Self::Student => "student",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
