//! Schedule snapshot: the roster and capacity table exchanged with the
//! view layer.

use serde::{Deserialize, Serialize};

use super::{CapacityTable, Vehicle};
use crate::error::PlannerResult;

/// A plain, serializable picture of the whole board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    /// Full vehicle roster.
    pub vehicles: Vec<Vehicle>,
    /// Per-slot labor-hour capacity.
    #[serde(default)]
    pub capacity: CapacityTable,
}

impl ScheduleSnapshot {
    /// Creates a snapshot.
    pub fn new(vehicles: Vec<Vehicle>, capacity: CapacityTable) -> Self {
        Self { vehicles, capacity }
    }

    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> PlannerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> PlannerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total number of activities across the fleet.
    pub fn activity_count(&self) -> usize {
        self.vehicles.iter().map(|v| v.activities.len()).sum()
    }
}
