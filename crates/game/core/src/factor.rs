//! Comparison dimensions used to rank goals.

/// A named comparison dimension between two candidate goals.
///
/// Each factor knows which direction is favourable; its weight lives in
/// [`crate::FactorWeights`] so it can be tuned per session.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum Factor {
    /// How far all players are from the goal. Higher is better.
    TotalPlayerDistance,
    /// How far the mover is from the goal. Lower is better.
    SpotDistance,
    /// Danger cost of the fastest path to the goal. Lower is better.
    FastestDangerCost,
    /// Threat of the area around the goal. Lower is better.
    SurroundThreat,
    /// Highest danger met along the fastest path. Lower is better.
    HighestDanger,
}

/// Which way a factor's metric improves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// Outcome of comparing a challenger's metric against the current best.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Better,
    Equal,
    Worse,
}

impl Factor {
    pub const ALL: [Factor; 5] = [
        Factor::TotalPlayerDistance,
        Factor::SpotDistance,
        Factor::FastestDangerCost,
        Factor::SurroundThreat,
        Factor::HighestDanger,
    ];

    /// Factors applied by both the scoring and the elimination pass, in order.
    ///
    /// `SurroundThreat` is measured for every candidate but is not part of
    /// the ranking.
    pub const ACTIVE: [Factor; 4] = [
        Factor::TotalPlayerDistance,
        Factor::SpotDistance,
        Factor::FastestDangerCost,
        Factor::HighestDanger,
    ];

    pub const fn direction(self) -> Direction {
        match self {
            Factor::TotalPlayerDistance => Direction::HigherIsBetter,
            Factor::SpotDistance
            | Factor::FastestDangerCost
            | Factor::SurroundThreat
            | Factor::HighestDanger => Direction::LowerIsBetter,
        }
    }

    /// Short label used in log lines.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Factor::TotalPlayerDistance => "TPD",
            Factor::SpotDistance => "SD",
            Factor::FastestDangerCost => "FDC",
            Factor::SurroundThreat => "ST",
            Factor::HighestDanger => "HD",
        }
    }

    /// Compares a challenger's metric against the current best's metric.
    pub fn compare(self, challenger: i32, best: i32) -> Verdict {
        if challenger == best {
            return Verdict::Equal;
        }

        let better = match self.direction() {
            Direction::HigherIsBetter => challenger > best,
            Direction::LowerIsBetter => challenger < best,
        };

        if better { Verdict::Better } else { Verdict::Worse }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_distance_prefers_higher() {
        let f = Factor::TotalPlayerDistance;
        assert_eq!(f.compare(10, 4), Verdict::Better);
        assert_eq!(f.compare(4, 10), Verdict::Worse);
        assert_eq!(f.compare(7, 7), Verdict::Equal);
    }

    #[test]
    fn cost_factors_prefer_lower() {
        for factor in [
            Factor::SpotDistance,
            Factor::FastestDangerCost,
            Factor::SurroundThreat,
            Factor::HighestDanger,
        ] {
            assert_eq!(factor.compare(1, 5), Verdict::Better, "{factor}");
            assert_eq!(factor.compare(5, 1), Verdict::Worse, "{factor}");
            assert_eq!(factor.compare(3, 3), Verdict::Equal, "{factor}");
        }
    }

    #[test]
    fn active_order_skips_surround_threat() {
        assert!(!Factor::ACTIVE.contains(&Factor::SurroundThreat));
        assert_eq!(Factor::ACTIVE[0], Factor::TotalPlayerDistance);
        assert_eq!(Factor::ACTIVE[3], Factor::HighestDanger);
    }

    #[test]
    fn parses_snake_case_names() {
        assert_eq!(
            "fastest_danger_cost".parse::<Factor>().unwrap(),
            Factor::FastestDangerCost
        );
        assert_eq!(Factor::SpotDistance.to_string(), "spot_distance");
    }
}
