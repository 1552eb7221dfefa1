//! Data-driven hunt content and loaders.
//!
//! - Scenarios (field size, players, goals with danger data) from RON
//! - Hunt configuration (factor weights, edge penalty, fallback mode) from TOML
//!
//! Loaders use hunt-core types directly with serde for deserialization.

pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scenario::{GoalSpec, Scenario};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ScenarioLoader};
