//! Goal selection for the mover.
//!
//! A decision runs in two phases:
//!
//! 1. **Ranking**: every goal becomes a [`Candidate`]; a weighted pass over the
//!    active factors accumulates [`Ratings`], and the candidates sharing the
//!    top rating form the best-options group.
//! 2. **Tie-break**: if more than one best option remains, a strict
//!    [`elimination`] pass looks for a single winner factor by factor; if
//!    none emerges the goal is drawn at random from all goals.
//!
//! [`TargetPicker`] drives both phases and reports the outcome as a
//! [`TargetDecision`].

pub mod candidate;
pub mod decision;
pub mod elimination;
pub mod fallback;
pub mod picker;
pub mod ratings;
pub mod scoring;

pub use candidate::{Candidate, CandidateEvaluator};
pub use decision::{DecisionStage, TargetDecision};
pub use picker::TargetPicker;
pub use ratings::Ratings;
