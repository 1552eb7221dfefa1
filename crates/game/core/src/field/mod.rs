//! Grid playfield: bounds, per-cell occupancy and goal measurement.

mod cell;
mod dimensions;
mod error;
mod playfield;

pub use cell::CellFlags;
pub use dimensions::FieldDimensions;
pub use error::FieldError;
pub use playfield::Playfield;
