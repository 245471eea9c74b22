//! Move validation and mutation.
//!
//! [`Planner`] is the single writer of a [`ScheduleStore`]. It exposes
//! two commands (move, set-lock) and a handful of read-only queries the
//! view layer calls while rendering or while a drag gesture is in
//! progress.
//!
//! # Lock semantics
//!
//! | State | Request | Result |
//! |-------|---------|--------|
//! | Unlocked | `set_lock(true)` | Locked |
//! | Locked | `set_lock(false)` | Unlocked |
//! | Unlocked | `move_activity` | Unlocked, slot updated |
//! | Locked | `move_activity` | Locked, slot unchanged, `applied == false` |
//!
//! Commands take `&mut self`: the lock is read at commit time and the
//! slot and its cached out-of-optimal flag are updated under the same
//! exclusive borrow.
//!
//! # Drag lifecycle
//! Drag-over feedback is a series of [`Planner::preview_move`] calls
//! followed by exactly one [`Planner::move_activity`] on drop. A drag
//! released outside a valid target issues no command and leaves the
//! board untouched.

use tracing::{debug, info, warn};

use crate::allocation::{self, SlotAllocation};
use crate::config::GeneratorConfig;
use crate::error::PlannerResult;
use crate::generator;
use crate::models::{CapacityTable, ScheduleSnapshot, Shift, Slot, Vehicle};
use crate::proximity::{proximity_rank, ProximityRank};
use crate::report::BoardKpi;
use crate::store::ScheduleStore;

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    /// Whether the activity was relocated. `false` means it is locked and
    /// stayed (or was returned to) its pre-drag slot.
    pub applied: bool,
    /// Slot the activity occupies after the request.
    pub slot: Slot,
    /// Cached out-of-optimal flag after the request.
    pub out_of_optimal_time: bool,
    /// Allocation of `slot`, recomputed after the mutation.
    pub allocation: SlotAllocation,
    /// Whether `slot` is now over capacity (advisory only).
    pub overallocated: bool,
    /// Hours by which `slot` exceeds capacity (0.0 when within).
    pub over_by: f64,
}

impl MoveOutcome {
    fn new(applied: bool, slot: Slot, out_of_optimal_time: bool, allocation: SlotAllocation) -> Self {
        Self {
            applied,
            slot,
            out_of_optimal_time,
            allocation,
            overallocated: allocation.is_overallocated(),
            over_by: allocation.over_by(),
        }
    }

    /// Whether the request was refused because the activity is locked.
    #[inline]
    pub fn is_rejected(&self) -> bool {
        !self.applied
    }
}

/// Read-only drag-over feedback for a hypothetical move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovePreview {
    /// Hovered target slot.
    pub target: Slot,
    /// Whether dropping here would relocate the activity.
    pub would_apply: bool,
    /// Target allocation as it would be after the drop.
    pub allocation: SlotAllocation,
    /// Closeness of the target to the activity's optimal slot.
    pub proximity: ProximityRank,
}

impl MovePreview {
    /// Whether the drop would leave the target over capacity.
    #[inline]
    pub fn would_overallocate(&self) -> bool {
        self.allocation.is_overallocated()
    }
}

/// Lock-aware move planner over a maintenance board.
///
/// # Example
///
/// ```
/// use u_maintenance::models::{Activity, CapacityTable, Shift, Slot, Vehicle};
/// use u_maintenance::planner::Planner;
///
/// let vehicles = vec![
///     Vehicle::new("train-1")
///         .with_activity(Activity::new("a1", "Brake Inspection", 0, Slot::new(3, Shift::Day), 5.0)),
/// ];
/// let mut planner = Planner::new(vehicles, CapacityTable::uniform(4.0)).unwrap();
///
/// let outcome = planner.move_activity("a1", "train-1", 4, Shift::Day).unwrap();
/// assert!(outcome.applied);
/// assert!(outcome.out_of_optimal_time);
/// assert!(outcome.overallocated);
/// assert_eq!(outcome.over_by, 1.0);
///
/// planner.set_lock("a1", "train-1", true).unwrap();
/// let rejected = planner.move_activity("a1", "train-1", 3, Shift::Day).unwrap();
/// assert!(!rejected.applied);
/// assert_eq!(rejected.slot, Slot::new(4, Shift::Day));
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    store: ScheduleStore,
}

impl Planner {
    /// Creates a planner over a validated roster and capacity table.
    pub fn new(vehicles: Vec<Vehicle>, capacity: CapacityTable) -> PlannerResult<Self> {
        Ok(Self::with_store(ScheduleStore::new(vehicles, capacity)?))
    }

    /// Creates a planner from a snapshot.
    pub fn from_snapshot(snapshot: ScheduleSnapshot) -> PlannerResult<Self> {
        Ok(Self::with_store(ScheduleStore::from_snapshot(snapshot)?))
    }

    /// Creates a planner over a freshly generated board.
    pub fn generated(config: &GeneratorConfig) -> PlannerResult<Self> {
        Self::from_snapshot(generator::generate_from_config(config)?)
    }

    /// Wraps an existing store.
    pub fn with_store(store: ScheduleStore) -> Self {
        Self { store }
    }

    /// The underlying store (read-only).
    pub fn store(&self) -> &ScheduleStore {
        &self.store
    }

    /// Releases the store.
    pub fn into_store(self) -> ScheduleStore {
        self.store
    }

    /// A plain copy of the current board for the view layer.
    pub fn snapshot(&self) -> ScheduleSnapshot {
        self.store.snapshot()
    }

    // ======================== Commands ========================

    /// Moves an activity to `(target_day, target_shift)`.
    ///
    /// # Errors
    /// - [`VehicleNotFound`](crate::PlannerError::VehicleNotFound) /
    ///   [`ActivityNotFound`](crate::PlannerError::ActivityNotFound) if the
    ///   activity does not exist under `vehicle_id`.
    /// - [`DayOutOfRange`](crate::PlannerError::DayOutOfRange) if
    ///   `target_day > 13`.
    ///
    /// A locked activity is not an error: the outcome reports
    /// `applied == false` and its unchanged slot. Overallocation of the
    /// destination is reported, never refused.
    pub fn move_activity(
        &mut self,
        activity_id: &str,
        vehicle_id: &str,
        target_day: u32,
        target_shift: Shift,
    ) -> PlannerResult<MoveOutcome> {
        let target = Slot::checked(target_day, target_shift)?;
        let activity = self.store.activity_mut(vehicle_id, activity_id)?;

        if activity.is_locked() {
            let slot = activity.current_slot();
            let out_of_optimal = activity.is_out_of_optimal_time();
            info!(
                activity = activity_id,
                vehicle = vehicle_id,
                %target,
                %slot,
                "activity is locked, move rejected"
            );
            return Ok(MoveOutcome::new(false, slot, out_of_optimal, self.slot_allocation(slot)));
        }

        let from = activity.current_slot();
        activity.place_at(target);
        let out_of_optimal = activity.is_out_of_optimal_time();

        let allocation = self.slot_allocation(target);
        let outcome = MoveOutcome::new(true, target, out_of_optimal, allocation);

        debug!(
            activity = activity_id,
            vehicle = vehicle_id,
            %from,
            to = %target,
            out_of_optimal,
            "activity rescheduled"
        );
        if outcome.overallocated {
            warn!(
                slot = %target,
                planned_hours = allocation.planned_hours,
                available_hours = allocation.available_hours,
                over_by = outcome.over_by,
                "slot overallocated after move"
            );
        }

        Ok(outcome)
    }

    /// Moves an activity using a textual shift token (`"day"`/`"night"`).
    ///
    /// Unknown tokens fail with
    /// [`UnknownShift`](crate::PlannerError::UnknownShift).
    pub fn move_activity_str(
        &mut self,
        activity_id: &str,
        vehicle_id: &str,
        target_day: u32,
        target_shift: &str,
    ) -> PlannerResult<MoveOutcome> {
        let shift: Shift = target_shift.parse()?;
        self.move_activity(activity_id, vehicle_id, target_day, shift)
    }

    /// Sets the lock flag. Slots and the out-of-optimal flag are untouched.
    pub fn set_lock(&mut self, activity_id: &str, vehicle_id: &str, locked: bool) -> PlannerResult<()> {
        let activity = self.store.activity_mut(vehicle_id, activity_id)?;
        activity.set_locked(locked);
        debug!(activity = activity_id, vehicle = vehicle_id, locked, "lock updated");
        Ok(())
    }

    /// Flips the lock flag and returns the new state.
    pub fn toggle_lock(&mut self, activity_id: &str, vehicle_id: &str) -> PlannerResult<bool> {
        let locked = !self.store.activity(vehicle_id, activity_id)?.is_locked();
        self.set_lock(activity_id, vehicle_id, locked)?;
        Ok(locked)
    }

    // ======================== Queries ========================

    /// Planned hours in `(day, shift)` across the fleet.
    pub fn planned_hours(&self, day: u32, shift: Shift) -> PlannerResult<f64> {
        let slot = Slot::checked(day, shift)?;
        Ok(allocation::planned_hours(self.store.vehicles(), slot))
    }

    /// Available hours in `(day, shift)`.
    pub fn available_hours(&self, day: u32, shift: Shift) -> PlannerResult<f64> {
        let slot = Slot::checked(day, shift)?;
        Ok(self.store.capacity().available_hours(slot))
    }

    /// Whether `(day, shift)` is over capacity.
    pub fn is_overallocated(&self, day: u32, shift: Shift) -> PlannerResult<bool> {
        let slot = Slot::checked(day, shift)?;
        Ok(self.slot_allocation(slot).is_overallocated())
    }

    /// Proximity of `(day, shift)` on the activity's own vehicle to its
    /// optimal slot.
    pub fn proximity_rank(&self, activity_id: &str, day: u32, shift: Shift) -> PlannerResult<ProximityRank> {
        let (vehicle, _) = self.store.find_activity(activity_id)?;
        let vehicle_id = vehicle.id.clone();
        self.proximity_rank_on(activity_id, &vehicle_id, day, shift)
    }

    /// Proximity of `(day, shift)` on `candidate_vehicle_id`'s row.
    ///
    /// Any other vehicle's row ranks [`ProximityRank::None`].
    pub fn proximity_rank_on(
        &self,
        activity_id: &str,
        candidate_vehicle_id: &str,
        day: u32,
        shift: Shift,
    ) -> PlannerResult<ProximityRank> {
        let candidate = Slot::checked(day, shift)?;
        let (vehicle, activity) = self.store.find_activity(activity_id)?;
        Ok(proximity_rank(
            candidate_vehicle_id,
            candidate,
            &vehicle.id,
            activity.optimal_slot(),
        ))
    }

    /// Drag-over preview of moving an activity to `(day, shift)`.
    ///
    /// Never mutates. For an unlocked activity the target allocation
    /// includes its hours (counted once if it already sits there); a
    /// locked activity would snap back, so the target is unaffected.
    pub fn preview_move(
        &self,
        activity_id: &str,
        vehicle_id: &str,
        day: u32,
        shift: Shift,
    ) -> PlannerResult<MovePreview> {
        let target = Slot::checked(day, shift)?;
        let activity = self.store.activity(vehicle_id, activity_id)?;
        let vehicles = self.store.vehicles();

        let would_apply = !activity.is_locked();
        let planned = if would_apply {
            allocation::planned_hours_if_moved(vehicles, target, activity)
        } else {
            allocation::planned_hours(vehicles, target)
        };

        Ok(MovePreview {
            target,
            would_apply,
            allocation: SlotAllocation::new(target, planned, self.store.capacity().available_hours(target)),
            proximity: proximity_rank(vehicle_id, target, vehicle_id, activity.optimal_slot()),
        })
    }

    /// Allocation for every slot, in calendar order.
    pub fn allocation_grid(&self) -> Vec<SlotAllocation> {
        allocation::allocation_grid(self.store.vehicles(), self.store.capacity())
    }

    /// Slots currently over capacity.
    pub fn overallocated_slots(&self) -> Vec<SlotAllocation> {
        allocation::overallocated_slots(self.store.vehicles(), self.store.capacity())
    }

    /// Board-wide indicators.
    pub fn kpi(&self) -> BoardKpi {
        BoardKpi::calculate(self.store.vehicles(), self.store.capacity())
    }

    fn slot_allocation(&self, slot: Slot) -> SlotAllocation {
        allocation::slot_allocation(self.store.vehicles(), self.store.capacity(), slot)
    }
}
