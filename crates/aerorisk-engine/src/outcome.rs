//! Simulation output: one row per sampled scenario.

use std::fmt;
use std::str::FromStr;

use aerorisk_core::errors::SummaryError;
use aerorisk_core::model::Role;
use serde::{Deserialize, Serialize};

use crate::sampling::ParameterDraw;

/// Sampled inputs and every derived quantity for one row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRow {
    pub inputs: ParameterDraw,
    /// `L`, 1/h.
    pub removal_rate: f64,
    pub time_constant_hours: f64,
    pub room_volume_m3: f64,
    /// Time-averaged concentration from a single faculty emitter, quanta/m³.
    pub faculty_concentration: f64,
    /// Time-averaged concentration from a single student emitter, quanta/m³.
    pub student_concentration: f64,
    pub dose_faculty_from_student: f64,
    pub dose_faculty_from_faculty: f64,
    pub dose_student_from_faculty: f64,
    pub dose_student_from_student: f64,
    pub faculty_session: f64,
    pub student_session: f64,
    pub faculty_semester: f64,
    pub student_semester: f64,
    /// Times the removal components were redrawn before `L` was usable.
    pub resample_attempts: u32,
}

impl OutcomeRow {
    pub fn value(&self, field: OutcomeField) -> f64 {
        match field {
            OutcomeField::Faculty => self.faculty_semester,
            OutcomeField::Student => self.student_semester,
            OutcomeField::FacultySession => self.faculty_session,
            OutcomeField::StudentSession => self.student_session,
            OutcomeField::RemovalRate => self.removal_rate,
            OutcomeField::TimeConstant => self.time_constant_hours,
            OutcomeField::FacultyConcentration => self.faculty_concentration,
            OutcomeField::StudentConcentration => self.student_concentration,
            OutcomeField::DoseFacultyFromStudent => self.dose_faculty_from_student,
            OutcomeField::DoseFacultyFromFaculty => self.dose_faculty_from_faculty,
            OutcomeField::DoseStudentFromFaculty => self.dose_student_from_faculty,
            OutcomeField::DoseStudentFromStudent => self.dose_student_from_student,
        }
    }
}

/// Immutable population of rows plus the seed that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomePopulation {
    rows: Vec<OutcomeRow>,
    seed: u64,
}

impl OutcomePopulation {
    pub(crate) fn new(rows: Vec<OutcomeRow>, seed: u64) -> Self {
        Self { rows, seed }
    }

    pub fn rows(&self) -> &[OutcomeRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Seed the population was generated from. Replaying it through
    /// `simulate_seeded` reproduces the rows exactly.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of rows whose removal components had to be redrawn.
    pub fn resampled_rows(&self) -> usize {
        self.rows.iter().filter(|r| r.resample_attempts > 0).count()
    }

    /// Column view of one field, in row order.
    pub fn column(&self, field: OutcomeField) -> Vec<f64> {
        self.rows.iter().map(|r| r.value(field)).collect()
    }
}

/// Numeric column of an [`OutcomeRow`] addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeField {
    /// Semester infection probability for one faculty member.
    Faculty,
    /// Semester infection probability for one student.
    Student,
    FacultySession,
    StudentSession,
    RemovalRate,
    TimeConstant,
    FacultyConcentration,
    StudentConcentration,
    DoseFacultyFromStudent,
    DoseFacultyFromFaculty,
    DoseStudentFromFaculty,
    DoseStudentFromStudent,
}

impl OutcomeField {
    pub const ALL: [OutcomeField; 12] = [
        Self::Faculty,
        Self::Student,
        Self::FacultySession,
        Self::StudentSession,
        Self::RemovalRate,
        Self::TimeConstant,
        Self::FacultyConcentration,
        Self::StudentConcentration,
        Self::DoseFacultyFromStudent,
        Self::DoseFacultyFromFaculty,
        Self::DoseStudentFromFaculty,
        Self::DoseStudentFromStudent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Faculty => "faculty",
            Self::Student => "student",
            Self::FacultySession => "faculty_session",
            Self::StudentSession => "student_session",
            Self::RemovalRate => "removal_rate",
            Self::TimeConstant => "time_constant",
            Self::FacultyConcentration => "faculty_concentration",
            Self::StudentConcentration => "student_concentration",
            Self::DoseFacultyFromStudent => "dose_faculty_from_student",
            Self::DoseFacultyFromFaculty => "dose_faculty_from_faculty",
            Self::DoseStudentFromFaculty => "dose_student_from_faculty",
            Self::DoseStudentFromStudent => "dose_student_from_student",
        }
    }

    /// Semester probability field for `role`.
    pub fn semester(role: Role) -> Self {
        match role {
            Role::Faculty => Self::Faculty,
            Role::Student => Self::Student,
        }
    }
}

impl fmt::Display for OutcomeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutcomeField {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| SummaryError::UnknownField {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_name_parses_back() {
        for field in OutcomeField::ALL {
            assert_eq!(field.name().parse::<OutcomeField>().unwrap(), field);
            assert_eq!(field.to_string(), field.name());
        }
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = "janitor".parse::<OutcomeField>().unwrap_err();
        assert_eq!(
            err,
            SummaryError::UnknownField {
                name: "janitor".to_string()
            }
        );
    }

    #[test]
    fn serde_names_match_display_names() {
        let json = serde_json::to_string(&OutcomeField::DoseStudentFromFaculty).unwrap();
        assert_eq!(json, "\"dose_student_from_faculty\"");
    }
}
