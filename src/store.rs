//! Schedule store.
//!
//! The store exclusively owns the vehicle roster and the capacity table.
//! Readers get shared references or cloned snapshots; mutation is only
//! reachable from inside the crate, through the planner's commands.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Activity, CapacityTable, ScheduleSnapshot, Vehicle};
use crate::validation::validate_snapshot;

/// Owner of all board state.
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    vehicles: Vec<Vehicle>,
    capacity: CapacityTable,
    // activity_id → (vehicle index, activity index)
    index: HashMap<String, (usize, usize)>,
}

impl ScheduleStore {
    /// Creates a store from a roster and capacity table.
    ///
    /// Fails with [`PlannerError::InvalidSnapshot`] if the input does not
    /// pass [`validate_snapshot`].
    pub fn new(vehicles: Vec<Vehicle>, capacity: CapacityTable) -> PlannerResult<Self> {
        validate_snapshot(&vehicles, &capacity).map_err(PlannerError::InvalidSnapshot)?;

        let index = vehicles
            .iter()
            .enumerate()
            .flat_map(|(vi, v)| {
                v.activities
                    .iter()
                    .enumerate()
                    .map(move |(ai, a)| (a.id.clone(), (vi, ai)))
            })
            .collect::<HashMap<_, _>>();

        debug!(
            vehicles = vehicles.len(),
            activities = index.len(),
            capacity_hours = capacity.total_hours(),
            "schedule store initialized"
        );

        Ok(Self {
            vehicles,
            capacity,
            index,
        })
    }

    /// Creates a store from a snapshot.
    pub fn from_snapshot(snapshot: ScheduleSnapshot) -> PlannerResult<Self> {
        Self::new(snapshot.vehicles, snapshot.capacity)
    }

    /// The full roster.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// The capacity table.
    pub fn capacity(&self) -> &CapacityTable {
        &self.capacity
    }

    /// Finds a vehicle by ID.
    pub fn vehicle(&self, vehicle_id: &str) -> PlannerResult<&Vehicle> {
        self.vehicles
            .iter()
            .find(|v| v.id == vehicle_id)
            .ok_or_else(|| PlannerError::VehicleNotFound(vehicle_id.to_string()))
    }

    /// Finds an activity under a specific vehicle.
    pub fn activity(&self, vehicle_id: &str, activity_id: &str) -> PlannerResult<&Activity> {
        let (vi, ai) = self.locate(vehicle_id, activity_id)?;
        Ok(&self.vehicles[vi].activities[ai])
    }

    /// Finds an activity anywhere in the fleet, with its owning vehicle.
    pub fn find_activity(&self, activity_id: &str) -> PlannerResult<(&Vehicle, &Activity)> {
        let &(vi, ai) = self
            .index
            .get(activity_id)
            .ok_or_else(|| PlannerError::UnknownActivity(activity_id.to_string()))?;
        let vehicle = &self.vehicles[vi];
        Ok((vehicle, &vehicle.activities[ai]))
    }

    /// Total number of activities.
    pub fn activity_count(&self) -> usize {
        self.index.len()
    }

    /// A plain copy of the current board.
    pub fn snapshot(&self) -> ScheduleSnapshot {
        ScheduleSnapshot::new(self.vehicles.clone(), self.capacity.clone())
    }

    pub(crate) fn activity_mut(
        &mut self,
        vehicle_id: &str,
        activity_id: &str,
    ) -> PlannerResult<&mut Activity> {
        let (vi, ai) = self.locate(vehicle_id, activity_id)?;
        Ok(&mut self.vehicles[vi].activities[ai])
    }

    fn locate(&self, vehicle_id: &str, activity_id: &str) -> PlannerResult<(usize, usize)> {
        let vehicle_idx = self
            .vehicles
            .iter()
            .position(|v| v.id == vehicle_id)
            .ok_or_else(|| PlannerError::VehicleNotFound(vehicle_id.to_string()))?;

        match self.index.get(activity_id) {
            Some(&(vi, ai)) if vi == vehicle_idx => Ok((vi, ai)),
            _ => Err(PlannerError::ActivityNotFound {
                vehicle_id: vehicle_id.to_string(),
                activity_id: activity_id.to_string(),
            }),
        }
    }
}
