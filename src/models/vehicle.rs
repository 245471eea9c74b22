//! Vehicle model.
//!
//! A vehicle is one row of the board. It owns its activities; the roster
//! of vehicles is fixed for a session and never grows or shrinks.

use serde::{Deserialize, Serialize};

use super::{Activity, Slot};

/// A fleet vehicle and its maintenance activities.
///
/// Activity order is display-only and carries no scheduling meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique vehicle identifier.
    pub id: String,
    /// Human-readable name (e.g. "Train 3").
    #[serde(default)]
    pub name: String,
    /// Activities owned by this vehicle.
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Vehicle {
    /// Creates a vehicle with no activities.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            activities: Vec::new(),
        }
    }

    /// Sets the vehicle name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds an activity.
    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activities.push(activity);
        self
    }

    /// Finds an activity by ID.
    pub fn activity(&self, activity_id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == activity_id)
    }

    /// Activities currently placed in `slot`.
    pub fn activities_in(&self, slot: Slot) -> impl Iterator<Item = &Activity> {
        self.activities.iter().filter(move |a| a.is_in(slot))
    }

    /// Number of activities.
    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Shift;

    fn sample_vehicle() -> Vehicle {
        Vehicle::new("train-1")
            .with_name("Train 1")
            .with_activity(Activity::new("A1", "Brake Inspection", 0, Slot::new(0, Shift::Day), 2.0))
            .with_activity(Activity::new("A2", "Engine Maintenance", 1, Slot::new(0, Shift::Day), 3.0))
            .with_activity(Activity::new("A3", "Door System Check", 2, Slot::new(1, Shift::Night), 1.0))
    }

    #[test]
    fn test_vehicle_builder() {
        let v = sample_vehicle();
        assert_eq!(v.id, "train-1");
        assert_eq!(v.name, "Train 1");
        assert_eq!(v.activity_count(), 3);
    }

    #[test]
    fn test_activity_lookup() {
        let v = sample_vehicle();
        assert_eq!(v.activity("A2").unwrap().kind, 1);
        assert!(v.activity("A99").is_none());
    }

    #[test]
    fn test_activities_in_slot() {
        let v = sample_vehicle();
        let ids: Vec<&str> = v
            .activities_in(Slot::new(0, Shift::Day))
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["A1", "A2"]);
        assert_eq!(v.activities_in(Slot::new(5, Shift::Day)).count(), 0);
    }
}
