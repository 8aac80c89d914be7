//! # aerorisk-engine
//!
//! Monte Carlo estimate of airborne infection risk in a classroom.
//! Samples uncertain inputs, propagates them through a well-mixed-room
//! transport and dose-response model, compounds risk across sessions, and
//! summarizes the resulting population.

pub mod default_view;
pub mod outcome;
pub mod pipeline;
pub mod propagation;
pub mod sampling;
pub mod simulator;
pub mod summary;

pub use default_view::{DefaultView, LazyDefaultView};
pub use outcome::{OutcomeField, OutcomePopulation, OutcomeRow};
pub use pipeline::evaluate;
pub use sampling::ParameterDraw;
pub use simulator::{simulate, simulate_seeded, Simulator};
pub use summary::{
    summarize, summarize_field, summarize_roles, summarize_with, Histogram, Quantile, RoleSummaries,
    SummaryOptions, SummaryStatistic,
};
