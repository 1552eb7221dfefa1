use super::Position;

/// A candidate destination for the mover.
///
/// `total_player_distance` and `spot_distance` are precomputed by whoever owns
/// the goal (see [`crate::Playfield::survey_goal`]); the target picker only
/// reads them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalSpot {
    pub position: Position,
    /// Sum of distances from every tracked player to this goal.
    pub total_player_distance: i32,
    /// Distance from the mover to this goal.
    pub spot_distance: i32,
}

impl GoalSpot {
    pub const fn new(position: Position, total_player_distance: i32, spot_distance: i32) -> Self {
        Self {
            position,
            total_player_distance,
            spot_distance,
        }
    }

    /// Goal with no distance attributes measured yet.
    pub const fn at(position: Position) -> Self {
        Self::new(position, 0, 0)
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.position.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.position.y
    }
}
