use super::{MoverError, Position};
use crate::field::Playfield;

/// The agent that hunts for goals.
///
/// The mover always occupies exactly one playfield cell; every relocation goes
/// through [`MovingSpot::set_location`] so the field's occupancy flags stay in
/// sync with [`MovingSpot::position`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovingSpot {
    position: Position,
}

impl MovingSpot {
    /// Places a new mover at the field origin.
    pub fn spawn(field: &mut Playfield) -> Result<Self, MoverError> {
        field.put_mover(Position::ORIGIN)?;
        Ok(Self {
            position: Position::ORIGIN,
        })
    }

    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// Moves the mover to `(new_x, new_y)`.
    ///
    /// Out-of-range coordinates are rejected before anything is touched: on
    /// error neither the mover nor the field occupancy change.
    pub fn set_location(
        &mut self,
        field: &mut Playfield,
        new_x: i32,
        new_y: i32,
    ) -> Result<(), MoverError> {
        let target = Position::new(new_x, new_y);
        let dimensions = field.dimensions();
        if !dimensions.contains(target) {
            return Err(MoverError::OutOfBounds {
                position: target,
                width: dimensions.width,
                height: dimensions.height,
            });
        }

        field.remove_mover(self.position)?;
        field.put_mover(target)?;
        self.position = target;
        Ok(())
    }
}

impl std::fmt::Display for MovingSpot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.position, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorSeverity, HuntError};
    use crate::field::FieldDimensions;

    fn setup(width: u32, height: u32) -> (Playfield, MovingSpot) {
        let mut field = Playfield::new(FieldDimensions::new(width, height)).unwrap();
        let mover = MovingSpot::spawn(&mut field).unwrap();
        (field, mover)
    }

    #[test]
    fn spawns_at_origin() {
        let (field, mover) = setup(5, 5);
        assert_eq!(mover.position(), Position::ORIGIN);
        assert!(field.has_mover(Position::ORIGIN));
    }

    #[test]
    fn relocation_moves_occupancy() {
        let (mut field, mut mover) = setup(5, 5);

        mover.set_location(&mut field, 3, 4).unwrap();

        assert_eq!(mover.position(), Position::new(3, 4));
        assert!(field.has_mover(Position::new(3, 4)));
        assert!(!field.has_mover(Position::ORIGIN));
    }

    #[test]
    fn rejects_out_of_range_without_side_effects() {
        let (mut field, mut mover) = setup(5, 5);
        mover.set_location(&mut field, 2, 2).unwrap();
        let before = field.clone();

        for (x, y) in [(-1, 0), (0, -1), (5, 0), (0, 5), (7, 9)] {
            let err = mover.set_location(&mut field, x, y).unwrap_err();
            assert!(matches!(err, MoverError::OutOfBounds { .. }));
            assert_eq!(err.severity(), ErrorSeverity::Internal);
            assert_eq!(mover.position(), Position::new(2, 2));
            assert_eq!(field, before);
        }
    }

    #[test]
    fn bounds_follow_width_and_height_on_rectangular_fields() {
        let (mut field, mut mover) = setup(6, 3);

        mover.set_location(&mut field, 5, 2).unwrap();
        assert!(mover.set_location(&mut field, 2, 3).is_err());
        assert!(mover.set_location(&mut field, 6, 0).is_err());
        assert_eq!(mover.position(), Position::new(5, 2));
    }

    #[test]
    fn displays_position() {
        let (_, mover) = setup(2, 2);
        assert_eq!(mover.to_string(), "[0,0]");
    }
}
