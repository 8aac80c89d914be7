use aerorisk_core::model::{CombinationRule, ParameterRange, ScenarioConfig};
use aerorisk_engine::{simulate_seeded, OutcomePopulation};
use proptest::prelude::*;

const ROWS: usize = 96;

fn probabilities(pop: &OutcomePopulation) -> Vec<[f64; 4]> {
    pop.rows()
        .iter()
        .map(|r| {
            [
                r.faculty_session,
                r.student_session,
                r.faculty_semester,
                r.student_semester,
            ]
        })
        .collect()
}

fn assert_not_higher(masked: &OutcomePopulation, open: &OutcomePopulation) {
    for (m, o) in probabilities(masked).iter().zip(probabilities(open).iter()) {
        for i in 0..4 {
            assert!(m[i] <= o[i] + 1e-15, "masked {} > open {}", m[i], o[i]);
        }
    }
}

fn arb_rule() -> impl Strategy<Value = CombinationRule> {
    prop_oneof![
        Just(CombinationRule::PerClass),
        Just(CombinationRule::IndependentSources),
    ]
}

fn arb_scenario() -> impl Strategy<Value = ScenarioConfig> {
    (
        100.0f64..5000.0,
        7.0f64..20.0,
        0u32..4,
        0u32..120,
        10.0f64..240.0,
        1u32..60,
        arb_rule(),
        0.0f64..0.2,
    )
        .prop_map(
            |(area, height, faculty, students, duration, sessions, rule, infected)| {
                ScenarioConfig {
                    floor_area_sqft: area,
                    height_ft: height,
                    faculty_count: faculty,
                    student_count: students,
                    duration_minutes: duration,
                    num_sessions: sessions,
                    background_infection: ParameterRange::new(0.0, infected),
                    combination_rule: rule,
                    ..ScenarioConfig::default()
                }
            },
        )
}

// ── Bounds ────────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn probabilities_stay_in_unit_interval(scenario in arb_scenario(), seed in any::<u64>()) {
        let pop = simulate_seeded(&scenario, ROWS, seed).unwrap();
        prop_assert_eq!(pop.len(), ROWS);
        for row in probabilities(&pop) {
            for p in row {
                prop_assert!((0.0..=1.0).contains(&p), "probability {} out of range", p);
            }
        }
    }

    #[test]
    fn semester_matches_compounding_formula(scenario in arb_scenario(), seed in any::<u64>()) {
        let pop = simulate_seeded(&scenario, ROWS, seed).unwrap();
        let k = f64::from(scenario.num_sessions);
        for row in pop.rows() {
            let expected = 1.0 - (1.0 - row.faculty_session).powf(k);
            prop_assert!((row.faculty_semester - expected).abs() < 1e-12);
        }
    }
}

// ── Mask efficiency monotonicity ─────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn exhalation_efficiency_never_raises_risk(
        scenario in arb_scenario(),
        low in 0.0f64..0.9,
        step in 0.0f64..0.1,
        seed in any::<u64>(),
    ) {
        let open = ScenarioConfig {
            exhalation_efficiency: ParameterRange::fixed(low),
            ..scenario.clone()
        };
        let masked = ScenarioConfig {
            exhalation_efficiency: ParameterRange::fixed(low + step),
            ..scenario
        };
        let open = simulate_seeded(&open, ROWS, seed).unwrap();
        let masked = simulate_seeded(&masked, ROWS, seed).unwrap();
        assert_not_higher(&masked, &open);
    }

    #[test]
    fn inhalation_efficiency_never_raises_risk(
        scenario in arb_scenario(),
        low in 0.0f64..0.9,
        step in 0.0f64..0.1,
        seed in any::<u64>(),
    ) {
        let open = ScenarioConfig {
            inhalation_efficiency: ParameterRange::fixed(low),
            ..scenario.clone()
        };
        let masked = ScenarioConfig {
            inhalation_efficiency: ParameterRange::fixed(low + step),
            ..scenario
        };
        let open = simulate_seeded(&open, ROWS, seed).unwrap();
        let masked = simulate_seeded(&masked, ROWS, seed).unwrap();
        assert_not_higher(&masked, &open);
    }
}

// ── Session count ────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn more_sessions_strictly_raise_semester_risk(
        sessions in 1u32..80,
        seed in any::<u64>(),
    ) {
        let fewer = ScenarioConfig { num_sessions: sessions, ..ScenarioConfig::default() };
        let more = ScenarioConfig { num_sessions: sessions + 1, ..ScenarioConfig::default() };
        let fewer = simulate_seeded(&fewer, ROWS, seed).unwrap();
        let more = simulate_seeded(&more, ROWS, seed).unwrap();

        for (a, b) in fewer.rows().iter().zip(more.rows()) {
            prop_assert_eq!(a.faculty_session, b.faculty_session);
            if a.faculty_session > 0.0 && a.faculty_semester < 1.0 {
                prop_assert!(b.faculty_semester > a.faculty_semester);
            }
            if a.student_session > 0.0 && a.student_semester < 1.0 {
                prop_assert!(b.student_semester > a.student_semester);
            }
        }
    }
}
