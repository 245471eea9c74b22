//! Proximity ranking between a candidate slot and an activity's optimal
//! slot.
//!
//! The rank drives visual emphasis only (a five-level highlight scale);
//! it never affects whether a move is permitted.
//!
//! # Rules (in priority order)
//!
//! | Condition | Rank |
//! |-----------|------|
//! | candidate on another vehicle | `None` |
//! | same day, same shift | `Exact` |
//! | same day, other shift | `SameDay` |
//! | 1 day apart | `Near` |
//! | 2 days apart | `Far` |
//! | more than 2 days apart | `None` |

use serde::{Deserialize, Serialize};

use crate::models::Slot;

/// Qualitative closeness to the optimal slot.
///
/// Variants are ordered so that closer ranks compare greater:
/// `None < Far < Near < SameDay < Exact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProximityRank {
    /// No emphasis: another vehicle, or more than two days away.
    None,
    /// Two days from optimal.
    Far,
    /// One day from optimal.
    Near,
    /// Optimal day, other shift.
    SameDay,
    /// The optimal slot itself.
    Exact,
}

impl ProximityRank {
    /// Highlight intensity on a 0..=4 scale (0 = no highlight).
    #[inline]
    pub fn intensity(self) -> u8 {
        self as u8
    }

    /// Whether the candidate gets any emphasis at all.
    #[inline]
    pub fn is_highlighted(self) -> bool {
        self != ProximityRank::None
    }
}

/// Ranks `candidate_slot` on `candidate_vehicle` against the optimal slot
/// of an activity owned by `optimal_vehicle`.
///
/// # Example
/// ```
/// use u_maintenance::models::{Shift, Slot};
/// use u_maintenance::proximity::{proximity_rank, ProximityRank};
///
/// let optimal = Slot::new(3, Shift::Day);
/// let rank = proximity_rank("train-1", Slot::new(4, Shift::Day), "train-1", optimal);
/// assert_eq!(rank, ProximityRank::Near);
///
/// let other_row = proximity_rank("train-2", optimal, "train-1", optimal);
/// assert_eq!(other_row, ProximityRank::None);
/// ```
pub fn proximity_rank(
    candidate_vehicle: &str,
    candidate_slot: Slot,
    optimal_vehicle: &str,
    optimal_slot: Slot,
) -> ProximityRank {
    if candidate_vehicle != optimal_vehicle {
        return ProximityRank::None;
    }

    match candidate_slot.day_delta(&optimal_slot) {
        0 if candidate_slot.shift == optimal_slot.shift => ProximityRank::Exact,
        0 => ProximityRank::SameDay,
        1 => ProximityRank::Near,
        2 => ProximityRank::Far,
        _ => ProximityRank::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Shift, HORIZON_DAYS};
    use proptest::prelude::*;

    const OPT: Slot = Slot::new(3, Shift::Day);

    fn rank(day: u8, shift: Shift) -> ProximityRank {
        proximity_rank("v1", Slot::new(day, shift), "v1", OPT)
    }

    #[test]
    fn test_rank_ladder() {
        assert_eq!(rank(3, Shift::Day), ProximityRank::Exact);
        assert_eq!(rank(3, Shift::Night), ProximityRank::SameDay);
        assert_eq!(rank(4, Shift::Day), ProximityRank::Near);
        assert_eq!(rank(2, Shift::Night), ProximityRank::Near);
        assert_eq!(rank(5, Shift::Night), ProximityRank::Far);
        assert_eq!(rank(1, Shift::Day), ProximityRank::Far);
        assert_eq!(rank(6, Shift::Day), ProximityRank::None);
        assert_eq!(rank(0, Shift::Day), ProximityRank::None);
    }

    #[test]
    fn test_cross_vehicle_is_none() {
        assert_eq!(proximity_rank("v2", OPT, "v1", OPT), ProximityRank::None);
    }

    #[test]
    fn test_ordering_and_intensity() {
        assert!(ProximityRank::Exact > ProximityRank::SameDay);
        assert!(ProximityRank::SameDay > ProximityRank::Near);
        assert!(ProximityRank::Near > ProximityRank::Far);
        assert!(ProximityRank::Far > ProximityRank::None);

        assert_eq!(ProximityRank::None.intensity(), 0);
        assert_eq!(ProximityRank::Exact.intensity(), 4);
        assert!(!ProximityRank::None.is_highlighted());
        assert!(ProximityRank::Far.is_highlighted());
    }

    #[test]
    fn test_serde_token() {
        assert_eq!(serde_json::to_string(&ProximityRank::SameDay).unwrap(), "\"same_day\"");
    }

    fn any_slot() -> impl Strategy<Value = Slot> {
        (0..HORIZON_DAYS, prop::bool::ANY)
            .prop_map(|(d, night)| Slot::new(d, if night { Shift::Night } else { Shift::Day }))
    }

    proptest! {
        #[test]
        fn prop_rank_depends_on_day_delta_only(a in any_slot(), b in any_slot()) {
            // Symmetric: swapping candidate and optimal gives the same rank.
            prop_assert_eq!(
                proximity_rank("v", a, "v", b),
                proximity_rank("v", b, "v", a)
            );
        }

        #[test]
        fn prop_closer_day_never_ranks_lower(opt in any_slot(), a in any_slot(), b in any_slot()) {
            if a.day_delta(&opt) < b.day_delta(&opt) && a.day_delta(&opt) >= 1 {
                prop_assert!(proximity_rank("v", a, "v", opt) >= proximity_rank("v", b, "v", opt));
            }
        }

        #[test]
        fn prop_other_vehicle_always_none(a in any_slot(), b in any_slot()) {
            prop_assert_eq!(proximity_rank("v1", a, "v2", b), ProximityRank::None);
        }
    }
}
