use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDimensions {
    pub width: u32,
    pub height: u32,
}

impl FieldDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Returns true when the position lies on the outer ring of the field.
    pub fn is_edge(&self, position: Position) -> bool {
        position.x == 0
            || position.x == self.width as i32 - 1
            || position.y == 0
            || position.y == self.height as i32 - 1
    }

    /// Row-major index of an in-bounds position.
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }
}
