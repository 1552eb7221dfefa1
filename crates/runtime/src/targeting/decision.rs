use hunt_core::{Factor, GoalSpot};
use serde::Serialize;

/// Which step of the selection settled on the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStage {
    /// Only one goal was offered.
    SoleCandidate,
    /// A single candidate held the highest rating.
    Rating,
    /// The strict tie-break settled on this factor.
    Elimination(Factor),
    /// Nothing separated the best options; the goal was drawn at random.
    Random,
}

/// Result of one target selection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TargetDecision {
    pub goal: GoalSpot,
    /// Index of `goal` in the goal list that was offered.
    pub index: usize,
    pub stage: DecisionStage,
    /// Final rating per goal, in input order.
    pub ratings: Vec<i64>,
}

impl TargetDecision {
    pub fn is_random(&self) -> bool {
        matches!(self.stage, DecisionStage::Random)
    }
}
