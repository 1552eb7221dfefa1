//! Single-mover hunt session.
//!
//! [`Hunt`] owns the playfield, the mover and the goal set, and drives
//! [`TargetPicker`] with a fresh seed for every decision.

use std::sync::Arc;

use hunt_core::{
    DangerOracle, GoalSpot, HuntConfig, MovingSpot, PcgRng, Playfield, Position, RngOracle,
    compute_seed,
};

use crate::api::{Result, RuntimeError};
use crate::config::RuntimeConfig;
use crate::targeting::{TargetDecision, TargetPicker};

/// Identifier mixed into decision seeds for the session's mover.
const MOVER_ID: u32 = 1;

/// Seed context for the fallback draw.
const FALLBACK_DRAW: u32 = 0;

pub struct Hunt {
    config: HuntConfig,
    field: Playfield,
    mover: MovingSpot,
    goals: Vec<Position>,
    oracle: Arc<dyn DangerOracle>,
    rng: Arc<dyn RngOracle>,
    game_seed: u64,
    nonce: u64,
}

impl Hunt {
    pub fn builder() -> HuntBuilder {
        HuntBuilder::new()
    }

    pub fn config(&self) -> &HuntConfig {
        &self.config
    }

    pub fn field(&self) -> &Playfield {
        &self.field
    }

    pub fn mover(&self) -> &MovingSpot {
        &self.mover
    }

    pub fn goals(&self) -> &[Position] {
        &self.goals
    }

    /// Number of decisions taken so far.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Goals with their distance attributes measured from the current mover
    /// and player positions.
    pub fn surveyed_goals(&self) -> Vec<GoalSpot> {
        let mover = self.mover.position();
        self.goals
            .iter()
            .map(|&goal| self.field.survey_goal(goal, mover))
            .collect()
    }

    /// Chooses the next target without moving.
    pub fn pick(&mut self) -> Result<TargetDecision> {
        let goals = self.surveyed_goals();
        let seed = compute_seed(self.game_seed, self.nonce, MOVER_ID, FALLBACK_DRAW);

        let picker = TargetPicker::new(
            &self.config,
            self.field.dimensions(),
            self.oracle.as_ref(),
            self.rng.as_ref(),
        );
        let decision = picker.decide(self.mover.position(), &goals, seed)?;
        self.nonce += 1;

        tracing::info!(
            "Hunt: decision {} from {} -> {} ({:?})",
            self.nonce,
            self.mover,
            decision.goal.position,
            decision.stage
        );

        Ok(decision)
    }

    /// Moves the mover to `target`, keeping field occupancy in sync.
    pub fn relocate(&mut self, target: Position) -> Result<()> {
        let from = self.mover.position();
        self.mover.set_location(&mut self.field, target.x, target.y)?;
        tracing::info!("Hunt: mover relocated {} -> {}", from, target);
        Ok(())
    }

    /// Picks a target, moves the mover onto it and collects the goal.
    pub fn step(&mut self) -> Result<TargetDecision> {
        let decision = self.pick()?;
        self.relocate(decision.goal.position)?;
        self.collect(decision.goal.position)?;
        Ok(decision)
    }

    /// True once every goal has been collected.
    pub fn is_finished(&self) -> bool {
        self.goals.is_empty()
    }

    fn collect(&mut self, goal: Position) -> Result<()> {
        self.goals.retain(|&remaining| remaining != goal);
        self.field.clear_goal(goal)?;
        tracing::debug!("Hunt: collected {}, {} goals left", goal, self.goals.len());
        Ok(())
    }
}

/// Builder for [`Hunt`].
pub struct HuntBuilder {
    config: RuntimeConfig,
    field: Option<Playfield>,
    goals: Vec<Position>,
    oracle: Option<Arc<dyn DangerOracle>>,
    rng: Arc<dyn RngOracle>,
}

impl HuntBuilder {
    pub fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            field: None,
            goals: Vec::new(),
            oracle: None,
            rng: Arc::new(PcgRng),
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Playfield with players already placed. The mover is spawned at build.
    pub fn field(mut self, field: Playfield) -> Self {
        self.field = Some(field);
        self
    }

    pub fn goals(mut self, goals: impl IntoIterator<Item = Position>) -> Self {
        self.goals = goals.into_iter().collect();
        self
    }

    pub fn oracle(mut self, oracle: Arc<dyn DangerOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    pub fn rng(mut self, rng: Arc<dyn RngOracle>) -> Self {
        self.rng = rng;
        self
    }

    pub fn build(self) -> Result<Hunt> {
        let mut field = self.field.ok_or(RuntimeError::MissingComponent("playfield"))?;
        let oracle = self.oracle.ok_or(RuntimeError::MissingComponent("danger oracle"))?;

        for &goal in &self.goals {
            field.place_goal(goal)?;
        }
        let mover = MovingSpot::spawn(&mut field)?;

        tracing::debug!(
            "Hunt: built {}x{} field, {} goals, {} players, seed={}",
            field.dimensions().width,
            field.dimensions().height,
            self.goals.len(),
            field.players().len(),
            self.config.seed
        );

        Ok(Hunt {
            config: self.config.hunt,
            field,
            mover,
            goals: self.goals,
            oracle,
            rng: self.rng,
            game_seed: self.config.seed,
            nonce: 0,
        })
    }
}

impl Default for HuntBuilder {
    fn default() -> Self {
        Self::new()
    }
}
