//! Maintenance activity model.
//!
//! An activity is the smallest schedulable unit of maintenance work. It
//! belongs to one vehicle, consumes a fixed number of labor-hours in
//! whichever slot it occupies, and remembers the slot it would ideally
//! be placed in.
//!
//! # Cached flag
//! `out_of_optimal_time` always equals `current_slot != optimal_slot`.
//! It is recomputed by every constructor, builder and mutation, and by
//! deserialization, so it can be read without recomputing.

use serde::{Deserialize, Serialize};

use super::Slot;

/// A maintenance activity placed on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ActivityRecord")]
pub struct Activity {
    /// Unique activity identifier (fleet-wide).
    pub id: String,
    /// Human-readable name (e.g. "Brake Inspection").
    pub name: String,
    /// Category used for grouping and coloring.
    pub kind: u32,
    /// Labor-hours consumed in whichever slot the activity occupies.
    pub required_hours: f64,
    current_slot: Slot,
    optimal_slot: Slot,
    out_of_optimal_time: bool,
    locked: bool,
}

impl Activity {
    /// Creates an unlocked activity placed at its optimal slot.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: u32,
        optimal_slot: Slot,
        required_hours: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            required_hours,
            current_slot: optimal_slot,
            optimal_slot,
            out_of_optimal_time: false,
            locked: false,
        }
    }

    /// Sets the initial slot.
    pub fn with_current_slot(mut self, slot: Slot) -> Self {
        self.place_at(slot);
        self
    }

    /// Sets the initial lock state.
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Slot the activity currently occupies.
    #[inline]
    pub fn current_slot(&self) -> Slot {
        self.current_slot
    }

    /// Ideal slot, fixed at creation.
    #[inline]
    pub fn optimal_slot(&self) -> Slot {
        self.optimal_slot
    }

    /// Whether the activity sits outside its optimal slot.
    #[inline]
    pub fn is_out_of_optimal_time(&self) -> bool {
        self.out_of_optimal_time
    }

    /// Whether the activity is pinned to its current slot.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether the activity currently occupies `slot`.
    #[inline]
    pub fn is_in(&self, slot: Slot) -> bool {
        self.current_slot == slot
    }

    /// Relocates the activity and refreshes the cached flag.
    ///
    /// Ignores the lock; lock enforcement belongs to the planner.
    pub(crate) fn place_at(&mut self, slot: Slot) {
        self.current_slot = slot;
        self.out_of_optimal_time = self.current_slot != self.optimal_slot;
    }

    pub(crate) fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }
}

/// Wire form of an activity.
///
/// `current_slot` defaults to the optimal slot and any incoming
/// `out_of_optimal_time` value is ignored in favor of recomputation.
#[derive(Deserialize)]
struct ActivityRecord {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    kind: u32,
    required_hours: f64,
    optimal_slot: Slot,
    #[serde(default)]
    current_slot: Option<Slot>,
    #[serde(default)]
    locked: bool,
}

impl From<ActivityRecord> for Activity {
    fn from(r: ActivityRecord) -> Self {
        let current = r.current_slot.unwrap_or(r.optimal_slot);
        Activity::new(r.id, r.name, r.kind, r.optimal_slot, r.required_hours)
            .with_current_slot(current)
            .with_locked(r.locked)
    }
}
