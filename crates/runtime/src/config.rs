//! Runtime configuration and environment overrides.
use std::env;

use hunt_core::{Factor, HuntConfig, RandomFallback};

/// Settings for a [`crate::Hunt`] session.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub hunt: HuntConfig,
    /// Base seed mixed into every decision's random draw.
    pub seed: u64,
    /// Number of steps a driver should run.
    pub steps: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            hunt: HuntConfig::default(),
            seed: 0,
            steps: 10,
        }
    }
}

impl RuntimeConfig {
    pub fn new(hunt: HuntConfig) -> Self {
        Self {
            hunt,
            ..Self::default()
        }
    }

    /// Construct configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Applies environment overrides on top of `self`.
    ///
    /// Environment variables:
    /// - `HUNT_SEED` - Base seed for random fallbacks (default: 0)
    /// - `HUNT_STEPS` - Steps to run (default: 10)
    /// - `HUNT_RANDOM_FALLBACK` - `legacy` or `uniform` (default: uniform)
    /// - `HUNT_EDGE_PENALTY` - Surround threat multiplier on edges (default: 1.6)
    /// - `HUNT_WEIGHT_TPD`, `HUNT_WEIGHT_SD`, `HUNT_WEIGHT_FDC`,
    ///   `HUNT_WEIGHT_ST`, `HUNT_WEIGHT_HD` - Factor weights
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup (see
    /// [`Self::with_env_overrides`] for the recognised keys).
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = read_key::<u64, _>(&lookup, "HUNT_SEED") {
            self.seed = seed;
        }

        if let Some(steps) = read_key::<usize, _>(&lookup, "HUNT_STEPS") {
            self.steps = steps;
        }

        if let Some(mode) = read_key::<RandomFallback, _>(&lookup, "HUNT_RANDOM_FALLBACK") {
            self.hunt.random_fallback = mode;
        }

        if let Some(penalty) = read_key::<f64, _>(&lookup, "HUNT_EDGE_PENALTY") {
            self.hunt.edge_penalty = penalty;
        }

        for factor in Factor::ALL {
            let key = format!("HUNT_WEIGHT_{}", factor.abbreviation());
            if let Some(weight) = read_key::<u32, _>(&lookup, &key) {
                self.hunt.weights = self.hunt.weights.with(factor, weight);
            }
        }

        self
    }
}

fn read_key<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key)?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!("Ignoring unparsable {}={:?}", key, value);
            None
        }
    }
}
