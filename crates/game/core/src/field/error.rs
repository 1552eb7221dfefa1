//! Playfield errors.

use crate::error::{ErrorSeverity, HuntError};
use crate::state::Position;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldError {
    /// Width or height is zero.
    #[error("playfield dimensions must be non-zero (got {width}x{height})")]
    EmptyDimensions { width: u32, height: u32 },

    /// Position is outside the playfield bounds.
    #[error("position {position} is out of bounds (field size: {width}x{height})")]
    OutOfBounds {
        position: Position,
        width: u32,
        height: u32,
    },
}

impl HuntError for FieldError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            FieldError::EmptyDimensions { .. } => ErrorSeverity::Validation,
            FieldError::OutOfBounds { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            FieldError::EmptyDimensions { .. } => "FIELD_EMPTY_DIMENSIONS",
            FieldError::OutOfBounds { .. } => "FIELD_OUT_OF_BOUNDS",
        }
    }
}
