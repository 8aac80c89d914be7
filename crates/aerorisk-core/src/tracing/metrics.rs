//! Span names shared across aerorisk crates.
//!
//! Consistent names keep log queries stable between releases.

/// Span wrapping one `simulate` call. Fields: `rows`, `seed`.
pub const SIMULATE_SPAN: &str = "aerorisk.simulate";

/// Span wrapping the summary of one field. Field: `field`.
pub const SUMMARIZE_SPAN: &str = "aerorisk.summarize";
