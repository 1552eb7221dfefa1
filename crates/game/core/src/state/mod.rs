//! Entities living on the playfield: positions, goals and the mover.

mod error;
mod goal;
mod mover;
mod position;

pub use error::MoverError;
pub use goal::GoalSpot;
pub use mover::MovingSpot;
pub use position::Position;
