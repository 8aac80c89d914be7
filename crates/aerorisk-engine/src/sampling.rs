//! Drawing one parameter vector from a scenario's ranges.

use aerorisk_core::constants::MIN_REMOVAL_RATE;
use aerorisk_core::errors::SimulationError;
use aerorisk_core::model::{EmissionModel, ParameterRange, ScenarioConfig};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// One independent draw of every uncertain quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterDraw {
    pub ventilation: f64,
    pub decay: f64,
    pub deposition: f64,
    pub additional_control: f64,
    pub exhalation_efficiency: f64,
    pub emission_faculty: f64,
    pub emission_student: f64,
    pub infection_fraction_faculty: f64,
    pub infection_fraction_student: f64,
    pub inhalation_efficiency: f64,
    pub breathing_rate_faculty: f64,
    pub breathing_rate_student: f64,
}

impl ParameterDraw {
    /// Total first-order removal rate `L` (1/h).
    pub fn removal_rate(&self) -> f64 {
        self.ventilation + self.decay + self.deposition + self.additional_control
    }
}

/// Uniform draw on `[low, high)`. Always consumes exactly one `f64` so that
/// scenarios differing only in range values stay on the same random stream;
/// a zero-width range returns `low` exactly.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, range: &ParameterRange) -> f64 {
    let u: f64 = rng.random();
    range.low + (range.high - range.low) * u
}

/// Emission-rate distribution, fixed per scenario.
#[derive(Debug, Clone, Copy)]
pub enum EmissionSampler {
    Uniform(ParameterRange),
    /// `10^N(mean, std_dev)`.
    Log10Normal(Normal<f64>),
}

impl EmissionSampler {
    pub fn new(
        field: &str,
        range: &ParameterRange,
        model: EmissionModel,
    ) -> Result<Self, SimulationError> {
        match model {
            EmissionModel::Uniform => Ok(Self::Uniform(*range)),
            EmissionModel::LogNormal => Normal::new(range.log_mean(), range.log_std_dev())
                .map(Self::Log10Normal)
                .map_err(|e| SimulationError::invalid(field, e.to_string())),
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Self::Uniform(range) => uniform(rng, range),
            Self::Log10Normal(normal) => 10f64.powf(normal.sample(rng)),
        }
    }
}

/// Pre-validated sampler for one scenario. Cheap to share across threads.
#[derive(Debug, Clone)]
pub struct ScenarioSampler {
    ventilation: ParameterRange,
    decay: ParameterRange,
    deposition: ParameterRange,
    additional_control: ParameterRange,
    exhalation_efficiency: ParameterRange,
    emission_faculty: EmissionSampler,
    emission_student: EmissionSampler,
    background_infection: ParameterRange,
    background_infection_student: Option<ParameterRange>,
    inhalation_efficiency: ParameterRange,
    breathing_rate_faculty: ParameterRange,
    breathing_rate_student: ParameterRange,
    max_resample_attempts: u32,
}

impl ScenarioSampler {
    /// Build a sampler. The scenario is expected to have passed `validate()`.
    pub fn new(
        scenario: &ScenarioConfig,
        max_resample_attempts: u32,
    ) -> Result<Self, SimulationError> {
        Ok(Self {
            ventilation: scenario.ventilation,
            decay: scenario.decay,
            deposition: scenario.deposition,
            additional_control: scenario.additional_control,
            exhalation_efficiency: scenario.exhalation_efficiency,
            emission_faculty: EmissionSampler::new(
                "emission_faculty",
                &scenario.emission_faculty,
                scenario.emission_model,
            )?,
            emission_student: EmissionSampler::new(
                "emission_student",
                &scenario.emission_student,
                scenario.emission_model,
            )?,
            background_infection: scenario.background_infection,
            background_infection_student: scenario.background_infection_student,
            inhalation_efficiency: scenario.inhalation_efficiency,
            breathing_rate_faculty: scenario.breathing_rate_faculty,
            breathing_rate_student: scenario.breathing_rate_student,
            max_resample_attempts,
        })
    }

    /// Draw one parameter vector for `row`.
    ///
    /// The four removal components are drawn first and redrawn while their
    /// sum is at or below `MIN_REMOVAL_RATE`. Returns the draw together with
    /// the number of redraws it took.
    pub fn draw<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        row: usize,
    ) -> Result<(ParameterDraw, u32), SimulationError> {
        let (ventilation, decay, deposition, additional_control, attempts) =
            self.draw_removal(rng, row)?;

        let exhalation_efficiency = uniform(rng, &self.exhalation_efficiency);
        let emission_faculty = self.emission_faculty.sample(rng);
        let emission_student = self.emission_student.sample(rng);
        let infection_fraction_faculty = uniform(rng, &self.background_infection);
        let infection_fraction_student = match &self.background_infection_student {
            Some(range) => uniform(rng, range),
            None => infection_fraction_faculty,
        };
        let inhalation_efficiency = uniform(rng, &self.inhalation_efficiency);
        let breathing_rate_faculty = uniform(rng, &self.breathing_rate_faculty);
        let breathing_rate_student = uniform(rng, &self.breathing_rate_student);

        Ok((
            ParameterDraw {
                ventilation,
                decay,
                deposition,
                additional_control,
                exhalation_efficiency,
                emission_faculty,
                emission_student,
                infection_fraction_faculty,
                infection_fraction_student,
                inhalation_efficiency,
                breathing_rate_faculty,
                breathing_rate_student,
            },
            attempts,
        ))
    }

    fn draw_removal<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        row: usize,
    ) -> Result<(f64, f64, f64, f64, u32), SimulationError> {
        let mut attempts = 0u32;
        loop {
            let ventilation = uniform(rng, &self.ventilation);
            let decay = uniform(rng, &self.decay);
            let deposition = uniform(rng, &self.deposition);
            let additional_control = uniform(rng, &self.additional_control);
            let removal_rate = ventilation + decay + deposition + additional_control;

            if removal_rate.is_finite() && removal_rate > MIN_REMOVAL_RATE {
                return Ok((ventilation, decay, deposition, additional_control, attempts));
            }
            if attempts >= self.max_resample_attempts {
                return Err(SimulationError::NumericDegeneracy {
                    row,
                    attempts,
                    removal_rate,
                });
            }
            attempts += 1;
        }
    }
}
