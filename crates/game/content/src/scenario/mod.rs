//! Scenario definitions: field size, player placement and goal danger data.

use hunt_core::{FieldDimensions, FieldError, Playfield, Position};

/// Danger figures and location of one goal in a scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalSpec {
    pub position: Position,
    pub danger_cost: i32,
    pub surround_threat: i32,
}

/// A complete hunt setup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub dimensions: FieldDimensions,
    #[cfg_attr(feature = "serde", serde(default))]
    pub players: Vec<Position>,
    pub goals: Vec<GoalSpec>,
}

impl Scenario {
    /// Builds the playfield with every player placed.
    ///
    /// Goals are left unmarked; the session marks them when it takes
    /// ownership of the field.
    pub fn playfield(&self) -> Result<Playfield, FieldError> {
        let mut field = Playfield::new(self.dimensions)?;
        for &player in &self.players {
            field.place_player(player)?;
        }
        Ok(field)
    }

    pub fn goal_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.goals.iter().map(|goal| goal.position)
    }
}
