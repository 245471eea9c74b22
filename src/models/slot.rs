//! Board slots: one (day, shift) period on the two-week calendar.
//!
//! # Layout
//! The board spans [`HORIZON_DAYS`] days, each split into a day and a
//! night shift, giving [`SLOT_COUNT`] schedulable periods. Days are
//! zero-indexed relative to the first day shown on the board.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Number of days on the board.
pub const HORIZON_DAYS: u8 = 14;

/// Shifts per day.
pub const SHIFTS_PER_DAY: usize = 2;

/// Total number of slots on the board.
pub const SLOT_COUNT: usize = HORIZON_DAYS as usize * SHIFTS_PER_DAY;

/// Work shift within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    /// Daytime shift.
    Day,
    /// Overnight shift.
    Night,
}

impl Shift {
    /// Both shifts in calendar order.
    pub const ALL: [Shift; SHIFTS_PER_DAY] = [Shift::Day, Shift::Night];

    /// Token used on the wire and in the view layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Shift::Day => "day",
            Shift::Night => "night",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shift {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Shift::Day),
            "night" => Ok(Shift::Night),
            _ => Err(PlannerError::UnknownShift(s.to_string())),
        }
    }
}

/// A (day, shift) pair identifying one schedulable period.
///
/// Ordered by day, then day shift before night shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    /// Day index (0..=13).
    pub day: u8,
    /// Shift within the day.
    pub shift: Shift,
}

impl Slot {
    /// Creates a slot without range checking.
    ///
    /// Intended for literals; use [`Slot::checked`] for caller input.
    pub const fn new(day: u8, shift: Shift) -> Self {
        Self { day, shift }
    }

    /// Creates a slot, rejecting days outside the horizon.
    ///
    /// No clamping is applied: an out-of-range day is a caller bug.
    pub fn checked(day: u32, shift: Shift) -> Result<Self, PlannerError> {
        match u8::try_from(day) {
            Ok(d) if d < HORIZON_DAYS => Ok(Self::new(d, shift)),
            _ => Err(PlannerError::DayOutOfRange(day)),
        }
    }

    /// Whether the day lies on the board.
    #[inline]
    pub fn is_in_range(&self) -> bool {
        self.day < HORIZON_DAYS
    }

    /// Position in calendar order (0..SLOT_COUNT).
    #[inline]
    pub fn index(&self) -> usize {
        self.day as usize * SHIFTS_PER_DAY + self.shift as usize
    }

    /// Absolute day distance to another slot.
    #[inline]
    pub fn day_delta(&self, other: &Slot) -> u8 {
        self.day.abs_diff(other.day)
    }

    /// All board slots in calendar order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..HORIZON_DAYS).flat_map(|day| Shift::ALL.into_iter().map(move |s| Slot::new(day, s)))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {} ({})", self.day, self.shift)
    }
}
