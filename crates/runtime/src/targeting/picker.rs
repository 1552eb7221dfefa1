//! Target selection for the mover.

use hunt_core::{
    DangerOracle, Factor, FieldDimensions, GoalSpot, HuntConfig, Position, RngOracle,
};

use super::{CandidateEvaluator, DecisionStage, TargetDecision, elimination, fallback, scoring};
use crate::api::{Result, RuntimeError};

/// Chooses which goal the mover pursues next.
///
/// # Decision Process
///
/// 1. **Evaluate**: build one [`super::Candidate`] per goal
/// 2. **Score**: run the weighted pass over [`Factor::ACTIVE`]
/// 3. **Narrow**: keep the candidates sharing the top rating; one left wins
/// 4. **Eliminate**: strict factor-by-factor tie-break over that group
/// 5. **Fallback**: draw from *all* goals with the injected RNG
///
/// The picker holds no state between calls; the only randomness comes from
/// `rng` and the seed passed to each call.
pub struct TargetPicker<'a> {
    config: &'a HuntConfig,
    dimensions: FieldDimensions,
    oracle: &'a dyn DangerOracle,
    rng: &'a dyn RngOracle,
}

impl<'a> TargetPicker<'a> {
    pub fn new(
        config: &'a HuntConfig,
        dimensions: FieldDimensions,
        oracle: &'a dyn DangerOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            config,
            dimensions,
            oracle,
            rng,
        }
    }

    /// Returns the goal the mover at `mover` should pursue.
    ///
    /// # Errors
    ///
    /// - [`RuntimeError::EmptyGoalList`] if `goals` is empty
    /// - [`RuntimeError::Oracle`] if the danger oracle fails for any goal
    pub fn pick_target(
        &self,
        mover: Position,
        goals: &[GoalSpot],
        seed: u64,
    ) -> Result<GoalSpot> {
        self.decide(mover, goals, seed).map(|decision| decision.goal)
    }

    /// Same as [`Self::pick_target`], but reports how the goal was chosen.
    pub fn decide(
        &self,
        mover: Position,
        goals: &[GoalSpot],
        seed: u64,
    ) -> Result<TargetDecision> {
        if goals.is_empty() {
            return Err(RuntimeError::EmptyGoalList);
        }

        let evaluator =
            CandidateEvaluator::new(self.dimensions, self.config.edge_penalty, self.oracle);
        let candidates = evaluator.evaluate_all(mover, goals)?;

        tracing::debug!(
            "TargetPicker: mover={} evaluating {} goals",
            mover,
            candidates.len()
        );
        for (index, candidate) in candidates.iter().enumerate() {
            tracing::trace!(
                "  #{} {}: TPD={} SD={} FDC={} ST={} HD={}",
                index,
                candidate.goal.position,
                candidate.total_player_distance,
                candidate.spot_distance,
                candidate.calculated_cost,
                candidate.surround_threat,
                candidate.highest_danger
            );
        }

        let ratings = scoring::rate_all(&candidates, &Factor::ACTIVE, &self.config.weights);
        let best_options = ratings.best_options();

        tracing::debug!("TargetPicker: best options={:?}", best_options);

        let (index, stage) = if let [only] = best_options[..] {
            let stage = if candidates.len() == 1 {
                DecisionStage::SoleCandidate
            } else {
                DecisionStage::Rating
            };
            (only, stage)
        } else if let Some((factor, winner)) =
            elimination::eliminate(&candidates, &best_options, &Factor::ACTIVE)
        {
            (winner, DecisionStage::Elimination(factor))
        } else {
            let index = fallback::pick_random(
                candidates.len(),
                self.config.random_fallback,
                self.rng,
                seed,
            );
            tracing::warn!(
                "TargetPicker: {} best options undecided, picked {} at random",
                best_options.len(),
                goals[index].position
            );
            (index, DecisionStage::Random)
        };

        tracing::debug!(
            "TargetPicker: target={} stage={:?}",
            goals[index].position,
            stage
        );

        Ok(TargetDecision {
            goal: goals[index],
            index,
            stage,
            ratings: ratings.into_vec(),
        })
    }
}
