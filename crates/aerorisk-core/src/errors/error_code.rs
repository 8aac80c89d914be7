//! RiskErrorCode trait for the service boundary.

/// Stable, machine-readable error codes.
///
/// The surrounding service maps these onto its own responses; the message
/// text is for humans and may change.
pub trait RiskErrorCode {
    /// Returns the error code string (e.g., "INVALID_CONFIGURATION").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const INVALID_CONFIGURATION: &str = "INVALID_CONFIGURATION";
pub const NUMERIC_DEGENERACY: &str = "NUMERIC_DEGENERACY";
pub const UNKNOWN_FIELD: &str = "UNKNOWN_FIELD";
pub const EMPTY_POPULATION: &str = "EMPTY_POPULATION";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
