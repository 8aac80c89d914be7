//! Tests for error codes and conversions.

use aerorisk_core::errors::{
    ConfigError, EngineError, RiskErrorCode, SimulationError, SummaryError,
};

#[test]
fn test_every_variant_has_a_stable_code() {
    let degenerate = SimulationError::NumericDegeneracy {
        row: 3,
        attempts: 100,
        removal_rate: 0.0,
    };
    let unknown = SummaryError::UnknownField {
        name: "x".to_string(),
    };
    let missing = ConfigError::FileNotFound {
        path: "aerorisk.toml".to_string(),
    };

    assert_eq!(
        SimulationError::invalid("height_ft", "must be positive").error_code(),
        "INVALID_CONFIGURATION"
    );
    assert_eq!(degenerate.error_code(), "NUMERIC_DEGENERACY");
    let non_finite = SimulationError::NonFiniteOutcome {
        row: 2,
        quantity: "student_semester".to_string(),
        value: f64::NAN,
    };
    assert_eq!(non_finite.error_code(), "NUMERIC_DEGENERACY");
    assert_eq!(unknown.error_code(), "UNKNOWN_FIELD");
    assert_eq!(SummaryError::EmptyPopulation.error_code(), "EMPTY_POPULATION");
    assert_eq!(missing.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_coded_string_format() {
    let err = SimulationError::invalid("num_sessions", "must be greater than 0");
    assert_eq!(
        err.coded_string(),
        "[INVALID_CONFIGURATION] Invalid configuration for num_sessions: must be greater than 0"
    );
}

#[test]
fn test_engine_error_delegates_code() {
    let err: EngineError = SummaryError::EmptyPopulation.into();
    assert_eq!(err.error_code(), "EMPTY_POPULATION");
    assert!(err.to_string().starts_with("Summary error:"));

    let err: EngineError = SimulationError::NumericDegeneracy {
        row: 0,
        attempts: 1,
        removal_rate: 0.0,
    }
    .into();
    assert_eq!(err.error_code(), "NUMERIC_DEGENERACY");

    let err: EngineError = ConfigError::InvalidValue {
        field: "AERORISK_SEED".to_string(),
        message: "bad".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_degeneracy_message_names_row() {
    let err = SimulationError::NumericDegeneracy {
        row: 17,
        attempts: 100,
        removal_rate: 0.0,
    };
    let msg = err.to_string();
    assert!(msg.contains("row 17"), "{msg}");
    assert!(msg.contains("100 redraws"), "{msg}");
}
