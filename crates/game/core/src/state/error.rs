//! Mover errors.

use crate::error::{ErrorSeverity, HuntError};
use crate::field::FieldError;
use crate::state::Position;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoverError {
    /// Requested location lies outside the playfield.
    #[error("mover location {position} is outside the playfield ({width}x{height})")]
    OutOfBounds {
        position: Position,
        width: u32,
        height: u32,
    },

    #[error(transparent)]
    Field(#[from] FieldError),
}

impl HuntError for MoverError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MoverError::OutOfBounds { .. } => ErrorSeverity::Internal,
            MoverError::Field(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MoverError::OutOfBounds { .. } => "MOVER_OUT_OF_BOUNDS",
            MoverError::Field(err) => err.error_code(),
        }
    }
}
