//! Board quality metrics (KPIs).
//!
//! Summarizes a board snapshot for status bars and dashboards.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Planned Hours | Sum of required hours over all activities |
//! | Available Hours | Sum of capacity over all board slots |
//! | Out-of-Optimal Rate | Fraction of activities away from their optimal slot |
//! | Overallocated Slots | Slots with planned > available |
//! | Total Overflow | Sum of excess hours over overallocated slots |
//! | Avg Utilization | Mean planned/available over slots with capacity |

use std::collections::HashMap;

use crate::allocation::allocation_grid;
use crate::models::{CapacityTable, Vehicle};

/// Board performance indicators.
///
/// All hour values are labor-hours.
#[derive(Debug, Clone)]
pub struct BoardKpi {
    /// Planned hours across the whole board.
    pub total_planned_hours: f64,
    /// Available hours across all board slots.
    pub total_available_hours: f64,
    /// Number of activities on the board.
    pub activity_count: usize,
    /// Activities not in their optimal slot.
    pub out_of_optimal_count: usize,
    /// Fraction of activities not in their optimal slot (0.0..1.0).
    pub out_of_optimal_rate: f64,
    /// Locked activities.
    pub locked_count: usize,
    /// Slots where planned hours exceed capacity.
    pub overallocated_slot_count: usize,
    /// Sum of excess hours over all overallocated slots.
    pub total_overflow_hours: f64,
    /// Mean utilization over slots with non-zero capacity.
    pub avg_utilization: f64,
    /// Out-of-optimal activities per vehicle.
    pub out_of_optimal_by_vehicle: HashMap<String, usize>,
}

impl BoardKpi {
    /// Computes KPIs from a roster and capacity table.
    pub fn calculate(vehicles: &[Vehicle], capacity: &CapacityTable) -> Self {
        let mut activity_count = 0;
        let mut out_of_optimal_count = 0;
        let mut locked_count = 0;
        let mut out_of_optimal_by_vehicle = HashMap::new();

        for vehicle in vehicles {
            let displaced = vehicle
                .activities
                .iter()
                .filter(|a| a.is_out_of_optimal_time())
                .count();
            activity_count += vehicle.activities.len();
            out_of_optimal_count += displaced;
            locked_count += vehicle.activities.iter().filter(|a| a.is_locked()).count();
            out_of_optimal_by_vehicle.insert(vehicle.id.clone(), displaced);
        }

        let grid = allocation_grid(vehicles, capacity);
        let total_planned_hours: f64 = grid.iter().map(|c| c.planned_hours).sum();
        let total_available_hours: f64 = grid.iter().map(|c| c.available_hours).sum();
        let overallocated: Vec<_> = grid.iter().filter(|c| c.is_overallocated()).collect();
        let total_overflow_hours: f64 = overallocated.iter().map(|c| c.over_by()).sum();

        let utilizations: Vec<f64> = grid.iter().filter_map(|c| c.utilization()).collect();
        let avg_utilization = if utilizations.is_empty() {
            0.0
        } else {
            utilizations.iter().sum::<f64>() / utilizations.len() as f64
        };

        let out_of_optimal_rate = if activity_count == 0 {
            0.0
        } else {
            out_of_optimal_count as f64 / activity_count as f64
        };

        Self {
            total_planned_hours,
            total_available_hours,
            activity_count,
            out_of_optimal_count,
            out_of_optimal_rate,
            locked_count,
            overallocated_slot_count: overallocated.len(),
            total_overflow_hours,
            avg_utilization,
            out_of_optimal_by_vehicle,
        }
    }

    /// Whether the board meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_overallocated_slots: usize, max_out_of_optimal_rate: f64) -> bool {
        self.overallocated_slot_count <= max_overallocated_slots
            && self.out_of_optimal_rate <= max_out_of_optimal_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, Shift, Slot};

    fn sample_fleet() -> Vec<Vehicle> {
        vec![
            Vehicle::new("train-1")
                .with_activity(
                    Activity::new("A1", "", 0, Slot::new(0, Shift::Day), 6.0)
                        .with_current_slot(Slot::new(1, Shift::Day)),
                )
                .with_activity(Activity::new("A2", "", 1, Slot::new(1, Shift::Day), 6.0).with_locked(true)),
            Vehicle::new("train-2")
                .with_activity(Activity::new("B1", "", 0, Slot::new(2, Shift::Night), 4.0)),
        ]
    }

    #[test]
    fn test_kpi_basic() {
        let kpi = BoardKpi::calculate(&sample_fleet(), &CapacityTable::uniform(10.0));
        assert!((kpi.total_planned_hours - 16.0).abs() < 1e-10);
        assert!((kpi.total_available_hours - 280.0).abs() < 1e-10);
        assert_eq!(kpi.activity_count, 3);
        assert_eq!(kpi.out_of_optimal_count, 1);
        assert!((kpi.out_of_optimal_rate - 1.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.locked_count, 1);
        assert_eq!(kpi.out_of_optimal_by_vehicle["train-1"], 1);
        assert_eq!(kpi.out_of_optimal_by_vehicle["train-2"], 0);
    }

    #[test]
    fn test_kpi_overflow() {
        let kpi = BoardKpi::calculate(&sample_fleet(), &CapacityTable::uniform(10.0));
        // 1/day carries 12h against 10h
        assert_eq!(kpi.overallocated_slot_count, 1);
        assert!((kpi.total_overflow_hours - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_utilization_skips_zero_capacity() {
        let capacity = CapacityTable::new()
            .with_hours(Slot::new(1, Shift::Day), 24.0)
            .with_hours(Slot::new(2, Shift::Night), 8.0);
        let kpi = BoardKpi::calculate(&sample_fleet(), &capacity);
        // 12/24 = 0.5, 4/8 = 0.5
        assert!((kpi.avg_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = BoardKpi::calculate(&[], &CapacityTable::new());
        assert_eq!(kpi.activity_count, 0);
        assert_eq!(kpi.total_planned_hours, 0.0);
        assert_eq!(kpi.out_of_optimal_rate, 0.0);
        assert_eq!(kpi.avg_utilization, 0.0);
        assert_eq!(kpi.overallocated_slot_count, 0);
    }

    #[test]
    fn test_meets_thresholds() {
        let kpi = BoardKpi::calculate(&sample_fleet(), &CapacityTable::uniform(10.0));
        assert!(kpi.meets_thresholds(1, 0.5));
        assert!(!kpi.meets_thresholds(0, 0.5));
        assert!(!kpi.meets_thresholds(1, 0.3));
    }
}
