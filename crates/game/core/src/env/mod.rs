//! Oracle traits for the collaborators the target picker consumes.
//!
//! - [`DangerOracle`]: path danger cost and surround threat per goal
//! - [`RngOracle`]: seeded random source for the fallback pick

mod danger;
mod rng;

pub use danger::{DangerOracle, OracleError};
pub use rng::{PcgRng, RngOracle, compute_seed};
