//! Error type for the arena.

use thiserror::Error;

use crate::types::RobotId;

/// Errors raised at the boundary between the simulation and its callers.
///
/// Stepping itself never fails; these cover configuration, intent
/// ingestion, and lookups of robots the engine does not know.
#[derive(Debug, Error, PartialEq)]
pub enum ArenaError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("intent field `{field}` must be -1, 0 or 1 (got {value})")]
    InvalidIntent { field: &'static str, value: i8 },
    #[error("fire power must be finite and non-negative (got {0})")]
    InvalidFirePower(f64),
    #[error("unknown robot {0}")]
    UnknownRobot(RobotId),
}
