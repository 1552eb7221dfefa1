//! Candidate evaluation: one comparable record per goal.

use hunt_core::{DangerOracle, Factor, FieldDimensions, GoalSpot, OracleError, Position, Verdict};

/// Raw metrics gathered for one goal during a single decision.
///
/// Candidates are immutable; ratings are tracked separately in
/// [`super::Ratings`] and keyed by the candidate's index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub goal: GoalSpot,
    pub total_player_distance: i32,
    pub spot_distance: i32,
    pub calculated_cost: i32,
    pub highest_danger: i32,
    /// Base threat scaled by `penalty`, truncated toward zero.
    pub surround_threat: i32,
    pub penalty: f64,
}

impl Candidate {
    pub fn metric(&self, factor: Factor) -> i32 {
        match factor {
            Factor::TotalPlayerDistance => self.total_player_distance,
            Factor::SpotDistance => self.spot_distance,
            Factor::FastestDangerCost => self.calculated_cost,
            Factor::SurroundThreat => self.surround_threat,
            Factor::HighestDanger => self.highest_danger,
        }
    }

    /// Compares this candidate against the current `best` on one factor.
    pub fn compare(&self, best: &Candidate, factor: Factor) -> Verdict {
        factor.compare(self.metric(factor), best.metric(factor))
    }
}

/// Builds [`Candidate`]s from goals using the danger oracle.
pub struct CandidateEvaluator<'a> {
    dimensions: FieldDimensions,
    edge_penalty: f64,
    oracle: &'a dyn DangerOracle,
}

impl<'a> CandidateEvaluator<'a> {
    pub fn new(
        dimensions: FieldDimensions,
        edge_penalty: f64,
        oracle: &'a dyn DangerOracle,
    ) -> Self {
        Self {
            dimensions,
            edge_penalty,
            oracle,
        }
    }

    /// Penalty multiplier for a goal's surround threat.
    pub fn penalty(&self, goal: &GoalSpot) -> f64 {
        if self.dimensions.is_edge(goal.position) {
            self.edge_penalty
        } else {
            1.0
        }
    }

    pub fn evaluate(&self, mover: Position, goal: &GoalSpot) -> Result<Candidate, OracleError> {
        let calculated_cost = self.oracle.danger_cost(mover, goal)?;
        let penalty = self.penalty(goal);
        let surround_threat = (self.oracle.surround_threat(goal)? as f64 * penalty) as i32;

        Ok(Candidate {
            goal: *goal,
            total_player_distance: goal.total_player_distance,
            spot_distance: goal.spot_distance,
            calculated_cost,
            // TODO: take the peak cell danger along the fastest path once
            // DangerOracle reports the path itself.
            highest_danger: 0,
            surround_threat,
            penalty,
        })
    }

    /// Evaluates every goal, in order. The first oracle failure aborts.
    pub fn evaluate_all(
        &self,
        mover: Position,
        goals: &[GoalSpot],
    ) -> Result<Vec<Candidate>, OracleError> {
        goals.iter().map(|goal| self.evaluate(mover, goal)).collect()
    }
}
