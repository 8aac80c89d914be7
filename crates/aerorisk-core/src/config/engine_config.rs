//! Top-level aerorisk configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{HistogramCutoff, SimulationConfig, SummaryConfig};
use crate::constants::PROJECT_CONFIG_FILENAME;
use crate::errors::{ConfigError, SimulationError};
use crate::model::ScenarioConfig;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`AERORISK_*`)
/// 3. Project config (`aerorisk.toml` in project root)
/// 4. User config (`~/.aerorisk/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub simulation: SimulationConfig,
    pub summary: SummaryConfig,
    /// Scenario used for the default view. `None` ⇒ `ScenarioConfig::default()`.
    pub scenario: Option<ScenarioConfig>,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub sample_count: Option<usize>,
    pub seed: Option<u64>,
    pub max_resample_attempts: Option<u32>,
    pub histogram_bins: Option<usize>,
    pub cutoff_percentile: Option<f64>,
}

impl EngineConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// The scenario behind the default view.
    pub fn effective_scenario(&self) -> ScenarioConfig {
        self.scenario.clone().unwrap_or_default()
    }

    /// Validate the configuration values.
    pub fn validate(config: &EngineConfig) -> Result<(), ConfigError> {
        if config.simulation.sample_count == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "simulation.sample_count".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.simulation.chunk_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "simulation.chunk_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.summary.histogram_bins == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "summary.histogram_bins".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        match config.summary.cutoff {
            Some(HistogramCutoff::Percentile { quantile })
                if !(quantile > 0.0 && quantile <= 1.0) =>
            {
                return Err(ConfigError::ValidationFailed {
                    field: "summary.cutoff.quantile".to_string(),
                    message: "must be in (0.0, 1.0]".to_string(),
                });
            }
            Some(HistogramCutoff::Fixed { value }) if !(value.is_finite() && value > 0.0) => {
                return Err(ConfigError::ValidationFailed {
                    field: "summary.cutoff.value".to_string(),
                    message: "must be a positive finite number".to_string(),
                });
            }
            _ => {}
        }
        if let Some(scenario) = &config.scenario {
            scenario.validate().map_err(|e| match e {
                SimulationError::InvalidConfiguration { field, message } => {
                    ConfigError::ValidationFailed {
                        field: format!("scenario.{field}"),
                        message,
                    }
                }
                other => ConfigError::ValidationFailed {
                    field: "scenario".to_string(),
                    message: other.to_string(),
                },
            })?;
        }
        Ok(())
    }

    /// Returns the user config path: `~/.aerorisk/config.toml`.
    fn user_config_path() -> Option<std::path::PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut EngineConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: EngineConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut EngineConfig, other: &EngineConfig) {
        // Simulation
        if other.simulation.sample_count.is_some() {
            base.simulation.sample_count = other.simulation.sample_count;
        }
        if other.simulation.seed.is_some() {
            base.simulation.seed = other.simulation.seed;
        }
        if other.simulation.max_resample_attempts.is_some() {
            base.simulation.max_resample_attempts = other.simulation.max_resample_attempts;
        }
        if other.simulation.chunk_size.is_some() {
            base.simulation.chunk_size = other.simulation.chunk_size;
        }

        // Summary
        if other.summary.histogram_bins.is_some() {
            base.summary.histogram_bins = other.summary.histogram_bins;
        }
        if other.summary.cutoff.is_some() {
            base.summary.cutoff = other.summary.cutoff;
        }

        // Scenario is replaced wholesale; its own serde defaults fill gaps.
        if other.scenario.is_some() {
            base.scenario = other.scenario.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `AERORISK_SAMPLE_COUNT`, `AERORISK_SEED`, etc.
    fn apply_env_overrides(config: &mut EngineConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_parse::<usize>("AERORISK_SAMPLE_COUNT")? {
            config.simulation.sample_count = Some(v);
        }
        if let Some(v) = env_parse::<u64>("AERORISK_SEED")? {
            config.simulation.seed = Some(v);
        }
        if let Some(v) = env_parse::<u32>("AERORISK_MAX_RESAMPLE_ATTEMPTS")? {
            config.simulation.max_resample_attempts = Some(v);
        }
        if let Some(v) = env_parse::<usize>("AERORISK_HISTOGRAM_BINS")? {
            config.summary.histogram_bins = Some(v);
        }
        if let Some(v) = env_parse::<f64>("AERORISK_CUTOFF_PERCENTILE")? {
            config.summary.cutoff = Some(HistogramCutoff::Percentile { quantile: v });
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut EngineConfig, cli: &CliOverrides) {
        if let Some(v) = cli.sample_count {
            config.simulation.sample_count = Some(v);
        }
        if let Some(v) = cli.seed {
            config.simulation.seed = Some(v);
        }
        if let Some(v) = cli.max_resample_attempts {
            config.simulation.max_resample_attempts = Some(v);
        }
        if let Some(v) = cli.histogram_bins {
            config.summary.histogram_bins = Some(v);
        }
        if let Some(v) = cli.cutoff_percentile {
            config.summary.cutoff = Some(HistogramCutoff::Percentile { quantile: v });
        }
    }
}

/// Read and parse an environment variable. Unset ⇒ `Ok(None)`.
fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                field: key.to_string(),
                message: format!("cannot parse {val:?}: {e}"),
            }),
        Err(_) => Ok(None),
    }
}

/// Returns the user-level config directory: `~/.aerorisk/`.
fn dirs_path() -> Option<std::path::PathBuf> {
    home_dir().map(|h| h.join(".aerorisk"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
