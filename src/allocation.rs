//! Slot allocation figures.
//!
//! Pure functions over a roster and capacity table: how many labor-hours
//! are planned into a slot, and whether that exceeds the slot's capacity.
//! Nothing here mutates state, so the same functions serve committed
//! schedules and drag-over previews alike.
//!
//! # Overallocation
//! A slot is overallocated iff `planned > available`. Equality is within
//! capacity. Overallocation is advisory and never blocks a move.
//!
//! Every total is summed in one pass over the roster, vehicle by vehicle
//! and activity by activity. Queries, previews and the grid all agree
//! bit-for-bit on fractional hours.

use crate::models::{Activity, CapacityTable, Slot, Vehicle};

/// Sum of required hours of every activity, on every vehicle, in `slot`.
pub fn planned_hours(vehicles: &[Vehicle], slot: Slot) -> f64 {
    vehicles
        .iter()
        .flat_map(|v| v.activities_in(slot))
        .map(|a| a.required_hours)
        .sum()
}

/// Planned hours of a single vehicle in `slot`.
pub fn vehicle_planned_hours(vehicle: &Vehicle, slot: Slot) -> f64 {
    vehicle.activities_in(slot).map(|a| a.required_hours).sum()
}

/// Planned hours in `slot` if `moving` were placed there.
///
/// Sums in the same roster order as [`planned_hours`] would after the
/// move, with `moving` counted at its own position as if it already sat
/// in `slot`. An activity already resident in `slot` is counted once.
pub fn planned_hours_if_moved(vehicles: &[Vehicle], slot: Slot, moving: &Activity) -> f64 {
    vehicles
        .iter()
        .flat_map(|v| &v.activities)
        .filter(|a| a.is_in(slot) || a.id == moving.id)
        .map(|a| a.required_hours)
        .sum()
}

/// Whether planned hours in `slot` exceed its capacity.
pub fn is_overallocated(vehicles: &[Vehicle], capacity: &CapacityTable, slot: Slot) -> bool {
    slot_allocation(vehicles, capacity, slot).is_overallocated()
}

/// Hours by which `slot` exceeds its capacity (0.0 when within capacity).
pub fn over_by(vehicles: &[Vehicle], capacity: &CapacityTable, slot: Slot) -> f64 {
    slot_allocation(vehicles, capacity, slot).over_by()
}

/// Planned vs. available hours for one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotAllocation {
    /// The slot described.
    pub slot: Slot,
    /// Hours planned into the slot across the fleet.
    pub planned_hours: f64,
    /// Hours available in the slot.
    pub available_hours: f64,
}

impl SlotAllocation {
    /// Creates an allocation figure.
    pub fn new(slot: Slot, planned_hours: f64, available_hours: f64) -> Self {
        Self {
            slot,
            planned_hours,
            available_hours,
        }
    }

    /// Whether planned hours strictly exceed available hours.
    #[inline]
    pub fn is_overallocated(&self) -> bool {
        self.planned_hours > self.available_hours
    }

    /// Excess hours (0.0 when within capacity).
    #[inline]
    pub fn over_by(&self) -> f64 {
        (self.planned_hours - self.available_hours).max(0.0)
    }

    /// Hours still free (0.0 when overallocated).
    #[inline]
    pub fn remaining_hours(&self) -> f64 {
        (self.available_hours - self.planned_hours).max(0.0)
    }

    /// planned / available.
    ///
    /// Returns `None` if the slot has no capacity.
    pub fn utilization(&self) -> Option<f64> {
        if self.available_hours <= 0.0 {
            return None;
        }
        Some(self.planned_hours / self.available_hours)
    }
}

/// Allocation figure for one slot.
pub fn slot_allocation(vehicles: &[Vehicle], capacity: &CapacityTable, slot: Slot) -> SlotAllocation {
    SlotAllocation::new(
        slot,
        planned_hours(vehicles, slot),
        capacity.available_hours(slot),
    )
}

/// Allocation figures for all board slots, in calendar order.
///
/// Each cell is exactly [`slot_allocation`] for its slot.
pub fn allocation_grid(vehicles: &[Vehicle], capacity: &CapacityTable) -> Vec<SlotAllocation> {
    Slot::all()
        .map(|slot| slot_allocation(vehicles, capacity, slot))
        .collect()
}

/// Slots whose planned hours exceed capacity, in calendar order.
pub fn overallocated_slots(vehicles: &[Vehicle], capacity: &CapacityTable) -> Vec<SlotAllocation> {
    allocation_grid(vehicles, capacity)
        .into_iter()
        .filter(SlotAllocation::is_overallocated)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Shift;

    const D3: Slot = Slot::new(3, Shift::Day);
    const N5: Slot = Slot::new(5, Shift::Night);

    fn sample_fleet() -> Vec<Vehicle> {
        vec![
            Vehicle::new("train-1")
                .with_activity(Activity::new("A", "Brake Inspection", 0, D3, 5.0))
                .with_activity(Activity::new("A2", "HVAC Service", 3, D3, 1.5)),
            Vehicle::new("train-2")
                .with_activity(Activity::new("B", "Wheel Inspection", 5, D3, 2.5))
                .with_activity(Activity::new("C", "Engine Maintenance", 1, N5, 8.0)),
        ]
    }

    #[test]
    fn test_planned_hours_across_vehicles() {
        let fleet = sample_fleet();
        assert!((planned_hours(&fleet, D3) - 9.0).abs() < 1e-10);
        assert!((planned_hours(&fleet, N5) - 8.0).abs() < 1e-10);
        assert_eq!(planned_hours(&fleet, Slot::new(0, Shift::Day)), 0.0);
    }

    #[test]
    fn test_vehicle_planned_hours() {
        let fleet = sample_fleet();
        assert!((vehicle_planned_hours(&fleet[0], D3) - 6.5).abs() < 1e-10);
        assert!((vehicle_planned_hours(&fleet[1], D3) - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_overallocation_boundary() {
        let fleet = sample_fleet();
        let exact = CapacityTable::uniform(9.0);
        assert!(!is_overallocated(&fleet, &exact, D3));
        assert_eq!(over_by(&fleet, &exact, D3), 0.0);

        let tight = CapacityTable::uniform(8.0);
        assert!(is_overallocated(&fleet, &tight, D3));
        assert!((over_by(&fleet, &tight, D3) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_missing_capacity_counts_as_zero() {
        let fleet = sample_fleet();
        let capacity = CapacityTable::new();
        assert!(is_overallocated(&fleet, &capacity, D3));
        assert!(!is_overallocated(&fleet, &capacity, Slot::new(0, Shift::Day)));
    }

    #[test]
    fn test_if_moved_no_double_count() {
        let fleet = sample_fleet();
        let a = fleet[0].activity("A").unwrap();
        // Already resident in D3
        assert!((planned_hours_if_moved(&fleet, D3, a) - 9.0).abs() < 1e-10);
        // Hypothetical move to N5
        assert!((planned_hours_if_moved(&fleet, N5, a) - 13.0).abs() < 1e-10);
    }

    #[test]
    fn test_slot_allocation_figures() {
        let alloc = SlotAllocation::new(N5, 13.0, 10.0);
        assert!(alloc.is_overallocated());
        assert!((alloc.over_by() - 3.0).abs() < 1e-10);
        assert_eq!(alloc.remaining_hours(), 0.0);
        assert!((alloc.utilization().unwrap() - 1.3).abs() < 1e-10);

        assert!(SlotAllocation::new(N5, 1.0, 0.0).utilization().is_none());
    }

    #[test]
    fn test_allocation_grid_matches_per_slot() {
        let fleet = sample_fleet();
        let capacity = CapacityTable::uniform(8.0);
        let grid = allocation_grid(&fleet, &capacity);
        assert_eq!(grid.len(), 28);
        for cell in &grid {
            assert_eq!(*cell, slot_allocation(&fleet, &capacity, cell.slot));
        }
    }

    #[test]
    fn test_overallocated_slots() {
        let fleet = sample_fleet();
        let over = overallocated_slots(&fleet, &CapacityTable::uniform(8.0));
        assert_eq!(over.len(), 1);
        assert_eq!(over[0].slot, D3);
    }

    fn fractional_fleet() -> Vec<Vehicle> {
        let slot = Slot::new(2, Shift::Day);
        vec![
            Vehicle::new("v1")
                .with_activity(Activity::new("a", "Brake Inspection", 0, slot, 0.1)),
            Vehicle::new("v2")
                .with_activity(Activity::new("b", "Wheel Inspection", 5, slot, 0.2))
                .with_activity(Activity::new("c", "HVAC Service", 3, slot, 0.3)),
        ]
    }

    #[test]
    fn test_fractional_hours_agree_across_views() {
        let fleet = fractional_fleet();
        let capacity = CapacityTable::uniform(0.6);
        let slot = Slot::new(2, Shift::Day);

        let grid = allocation_grid(&fleet, &capacity);
        let cell = grid[slot.index()];
        assert_eq!(cell.planned_hours.to_bits(), planned_hours(&fleet, slot).to_bits());
        assert_eq!(cell.is_overallocated(), is_overallocated(&fleet, &capacity, slot));

        let over = overallocated_slots(&fleet, &capacity);
        let listed = over.iter().any(|a| a.slot == slot);
        assert_eq!(listed, is_overallocated(&fleet, &capacity, slot));
        for cell in &grid {
            let query = is_overallocated(&fleet, &capacity, cell.slot);
            assert_eq!(cell.is_overallocated(), query);
        }
    }

    #[test]
    fn test_fractional_if_moved_matches_committed_sum() {
        const D9: Slot = Slot::new(9, Shift::Day);
        let target = Slot::new(2, Shift::Day);
        let mut fleet = vec![
            Vehicle::new("v1")
                .with_activity(Activity::new("b", "Wheel Inspection", 5, target, 0.1)),
            Vehicle::new("v2")
                .with_activity(Activity::new("c", "HVAC Service", 3, target, 0.2))
                .with_activity(Activity::new("A", "Brake Inspection", 0, D9, 0.3)),
        ];
        let moving = fleet[1].activity("A").unwrap().clone();
        let predicted = planned_hours_if_moved(&fleet, target, &moving);

        fleet[1].activities[1].place_at(target);
        assert_eq!(predicted.to_bits(), planned_hours(&fleet, target).to_bits());
    }
}
