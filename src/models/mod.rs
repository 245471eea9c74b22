//! Board domain models.
//!
//! Provides the plain data types the planner operates over. Everything
//! here is serde-serializable so a view layer can exchange snapshots
//! without touching the planner internals.
//!
//! # Domain Mappings
//!
//! | u-maintenance | Rail depot | Bus garage | Airline line maintenance |
//! |---------------|-----------|------------|--------------------------|
//! | Vehicle | Train set | Bus | Aircraft tail |
//! | Activity | Brake inspection | Tyre change | A-check task card |
//! | Slot | Depot shift | Garage shift | Hangar shift |
//! | CapacityTable | Fitter hours | Mechanic hours | Engineer hours |

mod activity;
mod capacity;
mod slot;
mod snapshot;
mod vehicle;

pub use activity::Activity;
pub use capacity::{CapacityEntry, CapacityTable, DuplicateCapacityEntry};
pub use slot::{Shift, Slot, HORIZON_DAYS, SHIFTS_PER_DAY, SLOT_COUNT};
pub use snapshot::ScheduleSnapshot;
pub use vehicle::Vehicle;
