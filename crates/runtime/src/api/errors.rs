//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the playfield, the mover and the danger oracle so
//! callers can bubble them up with consistent context.
use hunt_core::{ErrorSeverity, FieldError, HuntError, MoverError, OracleError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("cannot pick a target from an empty goal list")]
    EmptyGoalList,

    #[error("hunt requires a {0} to be configured before building")]
    MissingComponent(&'static str),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Mover(#[from] MoverError),

    #[error(transparent)]
    Field(#[from] FieldError),
}

impl HuntError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::EmptyGoalList | RuntimeError::MissingComponent(_) => {
                ErrorSeverity::Validation
            }
            RuntimeError::Oracle(err) => err.severity(),
            RuntimeError::Mover(err) => err.severity(),
            RuntimeError::Field(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::EmptyGoalList => "EMPTY_GOAL_LIST",
            RuntimeError::MissingComponent(_) => "MISSING_COMPONENT",
            RuntimeError::Oracle(err) => err.error_code(),
            RuntimeError::Mover(err) => err.error_code(),
            RuntimeError::Field(err) => err.error_code(),
        }
    }
}
