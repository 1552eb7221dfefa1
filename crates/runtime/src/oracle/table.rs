//! Precomputed danger data served through [`hunt_core::DangerOracle`].
use hunt_core::{DangerOracle, GoalSpot, OracleError, Position};
use std::collections::HashMap;

/// Danger figures recorded for one goal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DangerEntry {
    pub danger_cost: i32,
    pub surround_threat: i32,
}

/// DangerOracle backed by a per-goal lookup table.
///
/// The danger cost does not depend on where the mover stands; use this for
/// scenarios whose costs were computed offline, and for tests.
#[derive(Clone, Debug, Default)]
pub struct TableDangerOracle {
    entries: HashMap<Position, DangerEntry>,
}

impl TableDangerOracle {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_goal(mut self, position: Position, danger_cost: i32, surround_threat: i32) -> Self {
        self.insert(position, danger_cost, surround_threat);
        self
    }

    pub fn insert(&mut self, position: Position, danger_cost: i32, surround_threat: i32) {
        self.entries.insert(
            position,
            DangerEntry {
                danger_cost,
                surround_threat,
            },
        );
    }

    pub fn entry(&self, position: Position) -> Option<DangerEntry> {
        self.entries.get(&position).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DangerOracle for TableDangerOracle {
    fn danger_cost(&self, mover: Position, goal: &GoalSpot) -> Result<i32, OracleError> {
        self.entry(goal.position)
            .map(|entry| entry.danger_cost)
            .ok_or(OracleError::DangerCostUnavailable {
                mover,
                goal: goal.position,
            })
    }

    fn surround_threat(&self, goal: &GoalSpot) -> Result<i32, OracleError> {
        self.entry(goal.position)
            .map(|entry| entry.surround_threat)
            .ok_or(OracleError::SurroundThreatUnavailable {
                goal: goal.position,
            })
    }
}
