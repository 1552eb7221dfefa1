//! Deterministic data types for goal hunting on a grid.
//!
//! `hunt-core` defines the playfield, the mover and its goals, the ranking
//! factors, and the oracle traits the target picker consumes. It holds no
//! decision logic itself; `hunt-runtime` builds on these types.
pub mod config;
pub mod env;
pub mod error;
pub mod factor;
pub mod field;
pub mod state;

pub use config::{FactorWeights, HuntConfig, RandomFallback};
pub use env::{DangerOracle, OracleError, PcgRng, RngOracle, compute_seed};
pub use error::{ErrorSeverity, HuntError};
pub use factor::{Direction, Factor, Verdict};
pub use field::{CellFlags, FieldDimensions, FieldError, Playfield};
pub use state::{GoalSpot, MoverError, MovingSpot, Position};
