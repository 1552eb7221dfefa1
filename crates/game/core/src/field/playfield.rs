use super::{CellFlags, FieldDimensions, FieldError};
use crate::state::{GoalSpot, Position};

/// Rectangular grid tracking which cells hold the mover, players and goals.
///
/// Cells are stored row-major. Players are additionally kept in placement order
/// so goal surveys do not need to scan the whole grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playfield {
    dimensions: FieldDimensions,
    cells: Vec<CellFlags>,
    players: Vec<Position>,
}

impl Playfield {
    pub fn new(dimensions: FieldDimensions) -> Result<Self, FieldError> {
        if dimensions.is_empty() {
            return Err(FieldError::EmptyDimensions {
                width: dimensions.width,
                height: dimensions.height,
            });
        }

        Ok(Self {
            dimensions,
            cells: vec![CellFlags::empty(); dimensions.cell_count()],
            players: Vec::new(),
        })
    }

    pub fn dimensions(&self) -> FieldDimensions {
        self.dimensions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    pub fn cell(&self, position: Position) -> Option<CellFlags> {
        self.dimensions
            .index_of(position)
            .map(|index| self.cells[index])
    }

    pub fn has_mover(&self, position: Position) -> bool {
        self.cell(position)
            .is_some_and(|cell| cell.contains(CellFlags::MOVER))
    }

    pub fn put_mover(&mut self, position: Position) -> Result<(), FieldError> {
        self.cell_mut(position)?.insert(CellFlags::MOVER);
        Ok(())
    }

    pub fn remove_mover(&mut self, position: Position) -> Result<(), FieldError> {
        self.cell_mut(position)?.remove(CellFlags::MOVER);
        Ok(())
    }

    pub fn place_player(&mut self, position: Position) -> Result<(), FieldError> {
        self.cell_mut(position)?.insert(CellFlags::PLAYER);
        self.players.push(position);
        Ok(())
    }

    pub fn place_goal(&mut self, position: Position) -> Result<(), FieldError> {
        self.cell_mut(position)?.insert(CellFlags::GOAL);
        Ok(())
    }

    pub fn clear_goal(&mut self, position: Position) -> Result<(), FieldError> {
        self.cell_mut(position)?.remove(CellFlags::GOAL);
        Ok(())
    }

    pub fn players(&self) -> &[Position] {
        &self.players
    }

    /// Measures a goal's distance attributes relative to the current players
    /// and the mover's position.
    ///
    /// - `total_player_distance`: sum of Manhattan distances from every player
    /// - `spot_distance`: Manhattan distance from `mover`
    pub fn survey_goal(&self, goal: Position, mover: Position) -> GoalSpot {
        let total_player_distance: u32 = self
            .players
            .iter()
            .map(|player| player.manhattan_distance(goal))
            .sum();

        GoalSpot::new(
            goal,
            total_player_distance as i32,
            mover.manhattan_distance(goal) as i32,
        )
    }

    fn cell_mut(&mut self, position: Position) -> Result<&mut CellFlags, FieldError> {
        let index = self
            .dimensions
            .index_of(position)
            .ok_or(FieldError::OutOfBounds {
                position,
                width: self.dimensions.width,
                height: self.dimensions.height,
            })?;
        Ok(&mut self.cells[index])
    }
}
