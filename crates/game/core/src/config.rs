use crate::factor::Factor;

/// Weight each factor contributes to a candidate's rating during scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FactorWeights {
    pub total_player_distance: u32,
    pub spot_distance: u32,
    pub fastest_danger_cost: u32,
    pub surround_threat: u32,
    pub highest_danger: u32,
}

impl FactorWeights {
    pub const fn weight(&self, factor: Factor) -> u32 {
        match factor {
            Factor::TotalPlayerDistance => self.total_player_distance,
            Factor::SpotDistance => self.spot_distance,
            Factor::FastestDangerCost => self.fastest_danger_cost,
            Factor::SurroundThreat => self.surround_threat,
            Factor::HighestDanger => self.highest_danger,
        }
    }

    #[must_use]
    pub const fn with(mut self, factor: Factor, weight: u32) -> Self {
        match factor {
            Factor::TotalPlayerDistance => self.total_player_distance = weight,
            Factor::SpotDistance => self.spot_distance = weight,
            Factor::FastestDangerCost => self.fastest_danger_cost = weight,
            Factor::SurroundThreat => self.surround_threat = weight,
            Factor::HighestDanger => self.highest_danger = weight,
        }
        self
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            total_player_distance: 5,
            spot_distance: 4,
            fastest_danger_cost: 3,
            surround_threat: 2,
            highest_danger: 1,
        }
    }
}

/// How the random fallback maps a draw in `[0, 1)` onto a goal index.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RandomFallback {
    /// `floor(r * (count - 1))`: replays historical decisions, never picks
    /// the last goal.
    Legacy,
    /// `floor(r * count)`: every goal equally likely.
    #[default]
    Uniform,
}

impl RandomFallback {
    /// Maps a draw `r` in `[0, 1)` to an index below `count`.
    ///
    /// `count` must be non-zero.
    pub fn index(self, r: f64, count: usize) -> usize {
        let range = match self {
            RandomFallback::Legacy => count.saturating_sub(1),
            RandomFallback::Uniform => count,
        };
        ((r * range as f64) as usize).min(count - 1)
    }
}

/// Tunable parameters for target selection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HuntConfig {
    pub weights: FactorWeights,
    /// Multiplier applied to the surround threat of goals on the field edge.
    pub edge_penalty: f64,
    pub random_fallback: RandomFallback,
}

impl HuntConfig {
    pub const DEFAULT_EDGE_PENALTY: f64 = 1.6;

    pub fn new() -> Self {
        Self {
            weights: FactorWeights::default(),
            edge_penalty: Self::DEFAULT_EDGE_PENALTY,
            random_fallback: RandomFallback::default(),
        }
    }

    #[must_use]
    pub fn with_weights(mut self, weights: FactorWeights) -> Self {
        self.weights = weights;
        self
    }

    #[must_use]
    pub fn with_random_fallback(mut self, random_fallback: RandomFallback) -> Self {
        self.random_fallback = random_fallback;
        self
    }
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_lookup_matches_fields() {
        let weights = FactorWeights::default().with(Factor::SpotDistance, 9);
        assert_eq!(weights.weight(Factor::SpotDistance), 9);
        assert_eq!(weights.weight(Factor::TotalPlayerDistance), 5);
    }

    #[test]
    fn legacy_fallback_never_reaches_last_index() {
        let mode = RandomFallback::Legacy;
        assert_eq!(mode.index(0.0, 4), 0);
        assert_eq!(mode.index(0.999, 4), 2);
        assert_eq!(mode.index(0.5, 2), 0);
        assert_eq!(mode.index(0.9, 1), 0);
    }

    #[test]
    fn uniform_fallback_covers_every_index() {
        let mode = RandomFallback::Uniform;
        assert_eq!(mode.index(0.0, 4), 0);
        assert_eq!(mode.index(0.26, 4), 1);
        assert_eq!(mode.index(0.999, 4), 3);
    }

    #[test]
    fn fallback_mode_parses_from_str() {
        assert_eq!(
            "LEGACY".parse::<RandomFallback>().unwrap(),
            RandomFallback::Legacy
        );
        assert_eq!(RandomFallback::Uniform.to_string(), "uniform");
    }
}
