//! Observability for aerorisk.
//! `tracing` crate with `EnvFilter`, per-target log levels.

pub mod metrics;
pub mod setup;

pub use setup::init_tracing;
