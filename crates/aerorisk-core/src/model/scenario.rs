//! Classroom scenario: fixed knobs plus one range per uncertain quantity.

use serde::{Deserialize, Serialize};

use super::{CombinationRule, EmissionModel, ParameterRange};
use crate::constants::{FEET_TO_METERS, MIN_REMOVAL_RATE, MINUTES_PER_HOUR};
use crate::errors::{ConfigError, SimulationError};

/// Everything the sampler needs to simulate one classroom over a semester.
///
/// Units: floor area in ft², height in ft, duration in minutes, removal
/// rates in 1/h, breathing rates in m³/h, emission in quanta/h (or log10 of
/// it), efficiencies and infection fractions as fractions in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub floor_area_sqft: f64,
    pub height_ft: f64,
    pub faculty_count: u32,
    pub student_count: u32,
    pub duration_minutes: f64,
    pub num_sessions: u32,
    /// Courses a student attends with the same exposure profile. `None` ⇒ 1.
    pub courses_taken: Option<u32>,

    pub ventilation: ParameterRange,
    pub decay: ParameterRange,
    pub deposition: ParameterRange,
    pub additional_control: ParameterRange,
    pub exhalation_efficiency: ParameterRange,
    pub inhalation_efficiency: ParameterRange,
    pub breathing_rate_faculty: ParameterRange,
    pub breathing_rate_student: ParameterRange,
    pub emission_faculty: ParameterRange,
    pub emission_student: ParameterRange,
    /// Infectious fraction of the community. Drawn once per row and shared by
    /// both roles unless `background_infection_student` is set.
    pub background_infection: ParameterRange,
    pub background_infection_student: Option<ParameterRange>,

    pub emission_model: EmissionModel,
    pub combination_rule: CombinationRule,
}

impl Default for ScenarioConfig {
    /// 900 ft² × 10 ft room, one instructor, ten students, 75-minute sessions
    /// twice a week for 13 weeks.
    fn default() -> Self {
        Self {
            floor_area_sqft: 900.0,
            height_ft: 10.0,
            faculty_count: 1,
            student_count: 10,
            duration_minutes: 75.0,
            num_sessions: 26,
            courses_taken: None,
            ventilation: ParameterRange::new(2.0, 4.0),
            decay: ParameterRange::new(0.0, 0.63),
            deposition: ParameterRange::new(0.3, 1.5),
            additional_control: ParameterRange::fixed(0.0),
            exhalation_efficiency: ParameterRange::new(0.5, 0.7),
            inhalation_efficiency: ParameterRange::new(0.3, 0.5),
            breathing_rate_faculty: ParameterRange::new(1.0, 1.2),
            breathing_rate_student: ParameterRange::new(0.7, 0.9),
            emission_faculty: ParameterRange::new(100.0, 300.0),
            emission_student: ParameterRange::new(10.0, 30.0),
            background_infection: ParameterRange::new(0.0019, 0.0038),
            background_infection_student: None,
            emission_model: EmissionModel::Uniform,
            combination_rule: CombinationRule::IndependentSources,
        }
    }
}

impl ScenarioConfig {
    /// Population-total formulation: uniform emission, pooled per-class dose,
    /// students compounded over four courses.
    pub fn per_class_preset() -> Self {
        Self {
            courses_taken: Some(4),
            combination_rule: CombinationRule::PerClass,
            ..Self::default()
        }
    }

    /// Per-capita formulation with log-normally distributed emission and
    /// role-specific background infection.
    pub fn log_normal_preset() -> Self {
        Self {
            ventilation: ParameterRange::new(1.0, 4.0),
            decay: ParameterRange::new(0.0, 1.0),
            exhalation_efficiency: ParameterRange::new(0.4, 0.6),
            // 0.027–0.029 and 0.012 m³/min.
            breathing_rate_faculty: ParameterRange::new(1.62, 1.74),
            breathing_rate_student: ParameterRange::fixed(0.72),
            emission_faculty: ParameterRange::new(1.5, 0.71),
            emission_student: ParameterRange::new(0.69, 0.71),
            background_infection: ParameterRange::new(0.0070, 0.0140),
            background_infection_student: Some(ParameterRange::new(0.0070, 0.0140)),
            emission_model: EmissionModel::LogNormal,
            ..Self::default()
        }
    }

    /// Parse a scenario from TOML. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the scenario back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Room volume in m³.
    pub fn room_volume_m3(&self) -> f64 {
        self.floor_area_sqft * self.height_ft * FEET_TO_METERS.powi(3)
    }

    /// Session duration in hours.
    pub fn duration_hours(&self) -> f64 {
        self.duration_minutes / MINUTES_PER_HOUR
    }

    /// Number of independent sessions a student is exposed to over the term.
    pub fn student_exposures(&self) -> u32 {
        self.num_sessions.saturating_mul(self.courses_taken.unwrap_or(1))
    }

    /// Number of independent sessions a faculty member is exposed to over the term.
    pub fn faculty_exposures(&self) -> u32 {
        self.num_sessions
    }

    /// Reject malformed or physically meaningless scenarios before sampling.
    pub fn validate(&self) -> Result<(), SimulationError> {
        check_positive("floor_area_sqft", self.floor_area_sqft)?;
        check_positive("height_ft", self.height_ft)?;
        check_positive("duration_minutes", self.duration_minutes)?;
        // Subnormal inputs can underflow once converted.
        check_positive("duration_minutes", self.duration_hours())?;
        check_positive("floor_area_sqft", self.room_volume_m3())?;
        if self.num_sessions == 0 {
            return Err(SimulationError::invalid(
                "num_sessions",
                "must be greater than 0",
            ));
        }
        if self.courses_taken == Some(0) {
            return Err(SimulationError::invalid(
                "courses_taken",
                "must be greater than 0 when set",
            ));
        }

        let removal = [
            ("ventilation", &self.ventilation),
            ("decay", &self.decay),
            ("deposition", &self.deposition),
            ("additional_control", &self.additional_control),
        ];
        for (field, range) in removal {
            range.check_within(field, 0.0, f64::INFINITY)?;
        }
        let max_removal: f64 = removal.iter().map(|(_, r)| r.high).sum();
        if max_removal <= MIN_REMOVAL_RATE {
            return Err(SimulationError::invalid(
                "removal_rate",
                "ventilation + decay + deposition + additional_control is zero for every draw",
            ));
        }

        self.exhalation_efficiency
            .check_within("exhalation_efficiency", 0.0, 1.0)?;
        self.inhalation_efficiency
            .check_within("inhalation_efficiency", 0.0, 1.0)?;
        self.breathing_rate_faculty
            .check_within("breathing_rate_faculty", 0.0, f64::INFINITY)?;
        self.breathing_rate_student
            .check_within("breathing_rate_student", 0.0, f64::INFINITY)?;
        self.background_infection
            .check_within("background_infection", 0.0, 1.0)?;
        if let Some(student) = &self.background_infection_student {
            student.check_within("background_infection_student", 0.0, 1.0)?;
        }

        match self.emission_model {
            EmissionModel::Uniform => {
                self.emission_faculty
                    .check_within("emission_faculty", 0.0, f64::INFINITY)?;
                self.emission_student
                    .check_within("emission_student", 0.0, f64::INFINITY)?;
            }
            EmissionModel::LogNormal => {
                self.emission_faculty.check_log_normal("emission_faculty")?;
                self.emission_student.check_log_normal("emission_student")?;
            }
        }

        Ok(())
    }
}

fn check_positive(field: &str, value: f64) -> Result<(), SimulationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SimulationError::invalid(
            field,
            format!("must be a positive finite number, got {value}"),
        ));
    }
    Ok(())
}
