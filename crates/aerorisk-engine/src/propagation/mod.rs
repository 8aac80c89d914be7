//! Well-mixed-room transport, dose, and dose-response.
//!
//! ```text
//! L      = ventilation + decay + deposition + additional_control
//! factor = (1 − η_out) / (L·V) · [1 − (1 − e^(−L·t)) / (L·t)]
//! C_role = emission_role × factor
//! dose   = C × breathing_rate × t × (1 − η_in)
//! p      = infection_fraction × (1 − e^(−dose))
//! ```

pub mod combine;
pub mod room;

pub use combine::{compound, survival, SessionRisk};
pub use room::{build_up, concentration_factor, dose_response, inhaled_dose};

use aerorisk_core::errors::SimulationError;
use aerorisk_core::model::{CombinationRule, ScenarioConfig};

use crate::outcome::OutcomeRow;
use crate::sampling::ParameterDraw;

/// Per-scenario constants that do not vary between rows.
#[derive(Debug, Clone, Copy)]
pub struct RoomContext {
    pub room_volume_m3: f64,
    pub duration_hours: f64,
    pub faculty_count: u32,
    pub student_count: u32,
    pub faculty_exposures: u32,
    pub student_exposures: u32,
    pub rule: CombinationRule,
}

impl RoomContext {
    pub fn from_scenario(scenario: &ScenarioConfig) -> Self {
        Self {
            room_volume_m3: scenario.room_volume_m3(),
            duration_hours: scenario.duration_hours(),
            faculty_count: scenario.faculty_count,
            student_count: scenario.student_count,
            faculty_exposures: scenario.faculty_exposures(),
            student_exposures: scenario.student_exposures(),
            rule: scenario.combination_rule,
        }
    }
}

/// Push one parameter draw through the transport, dose, and combination
/// model. `draw.removal_rate()` must be positive.
///
/// Fails with `NonFiniteOutcome` if any derived quantity overflows or turns
/// NaN, e.g. an infinite emission rate behind a perfect mask.
pub fn propagate(
    ctx: &RoomContext,
    draw: ParameterDraw,
    resample_attempts: u32,
    row: usize,
) -> Result<OutcomeRow, SimulationError> {
    let removal_rate = draw.removal_rate();
    let t = ctx.duration_hours;

    let factor = concentration_factor(
        removal_rate,
        ctx.room_volume_m3,
        t,
        draw.exhalation_efficiency,
    );
    let faculty_concentration = draw.emission_faculty * factor;
    let student_concentration = draw.emission_student * factor;

    let dose_faculty_from_student = inhaled_dose(
        student_concentration,
        draw.breathing_rate_faculty,
        t,
        draw.inhalation_efficiency,
    );
    let dose_faculty_from_faculty = inhaled_dose(
        faculty_concentration,
        draw.breathing_rate_faculty,
        t,
        draw.inhalation_efficiency,
    );
    let dose_student_from_faculty = inhaled_dose(
        faculty_concentration,
        draw.breathing_rate_student,
        t,
        draw.inhalation_efficiency,
    );
    let dose_student_from_student = inhaled_dose(
        student_concentration,
        draw.breathing_rate_student,
        t,
        draw.inhalation_efficiency,
    );

    let session = SessionRisk::combine(
        ctx,
        draw.infection_fraction_faculty,
        draw.infection_fraction_student,
        [
            dose_faculty_from_student,
            dose_faculty_from_faculty,
            dose_student_from_faculty,
            dose_student_from_student,
        ],
    );

    let outcome = OutcomeRow {
        inputs: draw,
        removal_rate,
        time_constant_hours: 1.0 / removal_rate,
        room_volume_m3: ctx.room_volume_m3,
        faculty_concentration,
        student_concentration,
        dose_faculty_from_student,
        dose_faculty_from_faculty,
        dose_student_from_faculty,
        dose_student_from_student,
        faculty_session: session.faculty,
        student_session: session.student,
        faculty_semester: compound(session.faculty, ctx.faculty_exposures),
        student_semester: compound(session.student, ctx.student_exposures),
        resample_attempts,
    };
    ensure_finite(&outcome, row)?;
    Ok(outcome)
}

fn ensure_finite(outcome: &OutcomeRow, row: usize) -> Result<(), SimulationError> {
    let derived = [
        ("faculty_concentration", outcome.faculty_concentration),
        ("student_concentration", outcome.student_concentration),
        ("dose_faculty_from_student", outcome.dose_faculty_from_student),
        ("dose_faculty_from_faculty", outcome.dose_faculty_from_faculty),
        ("dose_student_from_faculty", outcome.dose_student_from_faculty),
        ("dose_student_from_student", outcome.dose_student_from_student),
        ("faculty_semester", outcome.faculty_semester),
        ("student_semester", outcome.student_semester),
    ];
    match derived.into_iter().find(|(_, v)| !v.is_finite()) {
        Some((quantity, value)) => Err(SimulationError::NonFiniteOutcome {
            row,
            quantity: quantity.to_string(),
            value,
        }),
        None => Ok(()),
    }
}
