//! Combining per-emitter risk into one session probability per role, and
//! compounding sessions over a term.

use aerorisk_core::model::CombinationRule;

use super::room::dose_response;
use super::RoomContext;

/// Per-session infection probability for one receiver of each role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionRisk {
    pub faculty: f64,
    pub student: f64,
}

impl SessionRisk {
    /// `doses` are single-emitter doses in the order faculty←student,
    /// faculty←faculty, student←faculty, student←student.
    pub fn combine(
        ctx: &RoomContext,
        fraction_faculty: f64,
        fraction_student: f64,
        doses: [f64; 4],
    ) -> Self {
        let [d_fs, d_ff, d_sf, d_ss] = doses;
        let students = ctx.student_count;
        let faculty = ctx.faculty_count;
        let faculty_peers = faculty.saturating_sub(1);
        let student_peers = students.saturating_sub(1);

        match ctx.rule {
            CombinationRule::IndependentSources => {
                let p_fs = fraction_student * dose_response(d_fs);
                let p_ff = fraction_faculty * dose_response(d_ff);
                let p_sf = fraction_faculty * dose_response(d_sf);
                let p_ss = fraction_student * dose_response(d_ss);
                Self {
                    faculty: 1.0 - survival(p_fs, students) * survival(p_ff, faculty_peers),
                    student: 1.0 - survival(p_ss, student_peers) * survival(p_sf, faculty),
                }
            }
            CombinationRule::PerClass => {
                let faculty_dose = f64::from(students) * fraction_student * d_fs
                    + f64::from(faculty_peers) * fraction_faculty * d_ff;
                let student_dose = f64::from(students) * fraction_student * d_ss
                    + f64::from(faculty) * fraction_faculty * d_sf;
                Self {
                    faculty: dose_response(faculty_dose),
                    student: dose_response(student_dose),
                }
            }
        }
    }
}

/// Probability of escaping `trials` independent events of probability `p`.
pub fn survival(p: f64, trials: u32) -> f64 {
    if trials == 0 {
        return 1.0;
    }
    (1.0 - p).powf(f64::from(trials))
}

/// `1 − (1 − p)^exposures`.
pub fn compound(p: f64, exposures: u32) -> f64 {
    1.0 - survival(p, exposures)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(rule: CombinationRule, faculty: u32, students: u32) -> RoomContext {
        RoomContext {
            room_volume_m3: 255.0,
            duration_hours: 1.25,
            faculty_count: faculty,
            student_count: students,
            faculty_exposures: 26,
            student_exposures: 26,
            rule,
        }
    }

    #[test]
    fn survival_of_zero_trials_is_one() {
        assert_eq!(survival(1.0, 0), 1.0);
        assert_eq!(compound(0.7, 0), 0.0);
    }

    #[test]
    fn compound_increases_with_exposures() {
        let p = 0.01;
        assert!(compound(p, 27) > compound(p, 26));
        assert!((compound(p, 2) - (1.0 - 0.99 * 0.99)).abs() < 1e-15);
    }

    #[test]
    fn lone_student_has_no_student_sources() {
        let risk = SessionRisk::combine(
            &ctx(CombinationRule::IndependentSources, 0, 1),
            0.01,
            0.01,
            [0.5, 0.5, 0.5, 0.5],
        );
        assert_eq!(risk.student, 0.0);
    }

    #[test]
    fn independent_sources_union() {
        let risk = SessionRisk::combine(
            &ctx(CombinationRule::IndependentSources, 1, 10),
            0.02,
            0.01,
            [0.1, 0.2, 0.3, 0.4],
        );
        let p_fs = 0.01 * (1.0 - (-0.1f64).exp());
        let expected_faculty = 1.0 - (1.0 - p_fs).powi(10);
        assert!((risk.faculty - expected_faculty).abs() < 1e-12);

        let p_sf = 0.02 * (1.0 - (-0.3f64).exp());
        let p_ss = 0.01 * (1.0 - (-0.4f64).exp());
        let expected_student = 1.0 - (1.0 - p_ss).powi(9) * (1.0 - p_sf);
        assert!((risk.student - expected_student).abs() < 1e-12);
    }

    #[test]
    fn per_class_stays_in_unit_interval_for_large_classes() {
        let risk = SessionRisk::combine(
            &ctx(CombinationRule::PerClass, 3, 500),
            1.0,
            1.0,
            [5.0, 5.0, 5.0, 5.0],
        );
        assert!(risk.faculty <= 1.0 && risk.faculty >= 0.0);
        assert!(risk.student <= 1.0 && risk.student >= 0.0);
    }
}
