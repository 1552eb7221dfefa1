use crate::error::{ErrorSeverity, HuntError};
use crate::state::{GoalSpot, Position};

/// Source of path cost and area threat for goals.
///
/// The pathfinding and threat models live outside hunt-core; the target picker
/// only needs these two numbers per goal.
pub trait DangerOracle: Send + Sync {
    /// Danger cost of the fastest path from `mover` to `goal`.
    fn danger_cost(&self, mover: Position, goal: &GoalSpot) -> Result<i32, OracleError>;

    /// Base threat of the area surrounding `goal`, before any edge penalty.
    fn surround_threat(&self, goal: &GoalSpot) -> Result<i32, OracleError>;
}

/// Failure reported by a [`DangerOracle`].
///
/// Any oracle failure aborts the decision it occurred in.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("no danger cost available for goal {goal} from {mover}")]
    DangerCostUnavailable { mover: Position, goal: Position },

    #[error("no surround threat available for goal {goal}")]
    SurroundThreatUnavailable { goal: Position },
}

impl HuntError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::DangerCostUnavailable { .. } => "ORACLE_DANGER_COST",
            OracleError::SurroundThreatUnavailable { .. } => "ORACLE_SURROUND_THREAT",
        }
    }
}
