//! Shared constants and compiled defaults for the aerorisk engine.

// --- Physics ---

/// Feet to meters. Room volume is `area_sqft × height_ft × FEET_TO_METERS³`.
pub const FEET_TO_METERS: f64 = 0.305;

/// Minutes per hour. Session durations are given in minutes, rates per hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Smallest total first-order removal rate (1/h) treated as non-degenerate.
pub const MIN_REMOVAL_RATE: f64 = 1e-9;

/// Largest log10 emission rate whose `10^x` is comfortably finite in f64.
pub const MAX_LOG10_EMISSION: f64 = 300.0;

/// Standard deviations above the log10 mean that must still stay below
/// `MAX_LOG10_EMISSION`.
pub const LOG_NORMAL_TAIL_SIGMAS: f64 = 8.0;

// --- Simulation ---

/// Default number of Monte Carlo rows per run.
pub const DEFAULT_SAMPLE_COUNT: usize = 10_000;

/// Default redraw budget for a row whose removal rate is degenerate.
pub const DEFAULT_MAX_RESAMPLE_ATTEMPTS: u32 = 100;

/// Rows generated per RNG stream. Fixes the seed → output mapping
/// independently of the rayon thread count.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

// --- Summary ---

/// Default histogram bin count.
pub const DEFAULT_HISTOGRAM_BINS: usize = 40;

/// Default histogram upper cutoff, as a quantile of the summarized field.
pub const DEFAULT_CUTOFF_PERCENTILE: f64 = 0.99;

/// Fixed quantile ladder reported by every summary.
pub const QUANTILE_LADDER: [f64; 5] = [0.05, 0.25, 0.50, 0.75, 0.95];

// --- Config files ---

/// Project-level config file name.
pub const PROJECT_CONFIG_FILENAME: &str = "aerorisk.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "AERORISK_LOG";

/// Tracing filter used when `AERORISK_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "aerorisk=info";
