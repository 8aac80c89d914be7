//! Tests for the precomputed default view.

use std::sync::Arc;

use aerorisk_core::config::EngineConfig;
use aerorisk_core::errors::{EngineError, SimulationError};
use aerorisk_core::model::ScenarioConfig;
use aerorisk_engine::{evaluate, DefaultView, LazyDefaultView};

fn small_config() -> EngineConfig {
    EngineConfig::from_toml(
        r#"
[simulation]
sample_count = 2000
seed = 5
"#,
    )
    .unwrap()
}

#[test]
fn test_build_summarizes_default_scenario() {
    let view = DefaultView::build(&small_config()).unwrap();
    assert_eq!(view.scenario, ScenarioConfig::default());
    assert_eq!(view.rows, 2000);
    assert_eq!(view.seed, 5);
    assert_eq!(view.summaries.faculty.count, 2000);
    assert_eq!(
        view.summaries.faculty.histogram.upper,
        view.summaries.student.histogram.upper
    );
}

#[test]
fn test_build_is_deterministic_for_a_seed() {
    let a = DefaultView::build(&small_config()).unwrap();
    let b = DefaultView::build(&small_config()).unwrap();
    assert_eq!(a.summaries, b.summaries);
}

#[test]
fn test_lazy_view_builds_once() {
    let lazy = LazyDefaultView::new(small_config());
    assert!(!lazy.is_built());
    let first = lazy.get().unwrap();
    let second = lazy.get().unwrap();
    assert!(lazy.is_built());
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_lazy_view_shared_across_threads() {
    let lazy = Arc::new(LazyDefaultView::new(small_config()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let lazy = Arc::clone(&lazy);
            std::thread::spawn(move || lazy.get().unwrap().summaries.student.mean)
        })
        .collect();
    let means: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(means.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_invalid_default_scenario_surfaces_simulation_error() {
    let mut config = small_config();
    config.scenario = Some(ScenarioConfig {
        num_sessions: 0,
        ..ScenarioConfig::default()
    });
    let lazy = LazyDefaultView::new(config);
    let err = lazy.get().unwrap_err();
    assert!(matches!(
        err,
        EngineError::Simulation(SimulationError::InvalidConfiguration { .. })
    ));
    assert!(!lazy.is_built());
}

#[test]
fn test_evaluate_reports_seed() {
    let (summaries, seed) = evaluate(&ScenarioConfig::per_class_preset(), &small_config()).unwrap();
    assert_eq!(seed, 5);
    assert!(summaries.student.mean >= 0.0);
}
