//! Error types for board requests.
//!
//! Every command and query resolves its failures at the request boundary
//! and returns them as a [`PlannerError`]. A rejected move on a locked
//! activity is *not* an error: it is a normal [`MoveOutcome`](crate::planner::MoveOutcome)
//! with `applied == false`. Overallocation is never an error either.

use crate::config::ConfigError;
use crate::validation::ValidationError;

/// Failure of a single board request.
///
/// A failed request leaves the schedule exactly as it was.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// No vehicle with this ID exists in the roster.
    #[error("vehicle not found: {0}")]
    VehicleNotFound(String),

    /// The activity does not exist under the referenced vehicle.
    #[error("activity '{activity_id}' not found on vehicle '{vehicle_id}'")]
    ActivityNotFound {
        vehicle_id: String,
        activity_id: String,
    },

    /// The activity ID is not known anywhere in the fleet.
    #[error("activity not found: {0}")]
    UnknownActivity(String),

    /// Day index outside the two-week horizon.
    #[error("day {0} is outside the board horizon (0..=13)")]
    DayOutOfRange(u32),

    /// A shift token other than `day` or `night`.
    #[error("unrecognized shift token: {0:?}")]
    UnknownShift(String),

    /// The initial roster or capacity table failed integrity checks.
    #[error("invalid schedule snapshot ({} problem(s))", .0.len())]
    InvalidSnapshot(Vec<ValidationError>),

    /// Board configuration could not be used.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Snapshot (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for board requests.
pub type PlannerResult<T> = Result<T, PlannerError>;
