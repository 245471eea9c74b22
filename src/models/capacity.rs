//! Shift capacity model.
//!
//! Each slot has a labor-hour ceiling shared by the whole fleet. The
//! table is supplied at initialization and is read-only afterwards.
//!
//! # Lookup misses
//! A slot with no entry has 0 hours available; lookups never fail.
//!
//! # Wire form
//! A list of entries. Each slot may appear at most once; a repeated slot
//! fails deserialization with [`DuplicateCapacityEntry`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Shift, Slot};

/// Available labor-hours for one slot (wire form).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityEntry {
    /// Day index (0..=13).
    pub day: u8,
    /// Shift within the day.
    pub shift: Shift,
    /// Labor-hours available across all vehicles.
    pub available_hours: f64,
}

impl CapacityEntry {
    /// Creates an entry.
    pub fn new(day: u8, shift: Shift, available_hours: f64) -> Self {
        Self {
            day,
            shift,
            available_hours,
        }
    }

    /// Slot this entry describes.
    #[inline]
    pub fn slot(&self) -> Slot {
        Slot::new(self.day, self.shift)
    }
}

/// A capacity entry list named the same slot twice.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("duplicate capacity entry for {slot}")]
pub struct DuplicateCapacityEntry {
    /// The repeated slot.
    pub slot: Slot,
}

/// Per-slot labor-hour capacity.
///
/// Serialized as a list of [`CapacityEntry`] values in calendar order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CapacityEntry>", into = "Vec<CapacityEntry>")]
pub struct CapacityTable {
    hours: BTreeMap<Slot, f64>,
}

impl CapacityTable {
    /// Creates an empty table (every slot reads as 0 hours).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with the same capacity in every board slot.
    pub fn uniform(available_hours: f64) -> Self {
        Slot::all().fold(Self::new(), |t, slot| t.with_hours(slot, available_hours))
    }

    /// Sets the capacity of one slot.
    pub fn with_hours(mut self, slot: Slot, available_hours: f64) -> Self {
        self.hours.insert(slot, available_hours);
        self
    }

    /// Available labor-hours in `slot` (0.0 if unset).
    #[inline]
    pub fn available_hours(&self, slot: Slot) -> f64 {
        self.hours.get(&slot).copied().unwrap_or(0.0)
    }

    /// Whether the slot has an explicit entry.
    pub fn contains(&self, slot: Slot) -> bool {
        self.hours.contains_key(&slot)
    }

    /// Whether every board slot has an explicit entry.
    pub fn is_complete(&self) -> bool {
        Slot::all().all(|s| self.contains(s))
    }

    /// Board slots without an entry, in calendar order.
    pub fn missing_slots(&self) -> Vec<Slot> {
        Slot::all().filter(|s| !self.contains(*s)).collect()
    }

    /// Explicit entries in calendar order.
    pub fn entries(&self) -> impl Iterator<Item = (Slot, f64)> + '_ {
        self.hours.iter().map(|(slot, hours)| (*slot, *hours))
    }

    /// Total available hours over the explicit entries.
    pub fn total_hours(&self) -> f64 {
        self.hours.values().sum()
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.hours.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }
}

impl TryFrom<Vec<CapacityEntry>> for CapacityTable {
    type Error = DuplicateCapacityEntry;

    fn try_from(entries: Vec<CapacityEntry>) -> Result<Self, Self::Error> {
        let mut hours = BTreeMap::new();
        for entry in entries {
            let slot = entry.slot();
            if hours.insert(slot, entry.available_hours).is_some() {
                return Err(DuplicateCapacityEntry { slot });
            }
        }
        Ok(Self { hours })
    }
}

impl From<CapacityTable> for Vec<CapacityEntry> {
    fn from(table: CapacityTable) -> Self {
        table
            .entries()
            .map(|(slot, hours)| CapacityEntry::new(slot.day, slot.shift, hours))
            .collect()
    }
}

impl FromIterator<(Slot, f64)> for CapacityTable {
    fn from_iter<I: IntoIterator<Item = (Slot, f64)>>(iter: I) -> Self {
        Self {
            hours: iter.into_iter().collect(),
        }
    }
}
