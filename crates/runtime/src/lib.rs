//! Target selection runtime for the grid hunt.
//!
//! This crate turns the data types of `hunt-core` into decisions: the mover
//! evaluates every goal, ranks them with a weighted factor vote and breaks
//! ties with a strict elimination pass before falling back to a seeded draw.
//!
//! Modules are organized by responsibility:
//! - [`targeting`] hosts candidate evaluation, scoring, elimination and the
//!   [`TargetPicker`] that runs them
//! - [`hunt`] wires a playfield, mover, goals and oracles into a session
//! - [`oracle`] provides in-memory oracle implementations
//! - [`config`] holds runtime settings and environment overrides
//! - [`api`] exposes the error types callers handle
pub mod api;
pub mod config;
pub mod hunt;
pub mod oracle;
pub mod targeting;

pub use api::{Result, RuntimeError};
pub use config::RuntimeConfig;
pub use hunt::{Hunt, HuntBuilder};
pub use oracle::{DangerEntry, TableDangerOracle};
pub use targeting::{
    Candidate, CandidateEvaluator, DecisionStage, Ratings, TargetDecision, TargetPicker,
};
