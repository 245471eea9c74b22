//! Maintenance shift board for the U-Engine ecosystem.
//!
//! Places discrete maintenance activities for a vehicle fleet onto a
//! two-week calendar of day/night shift slots, tracks per-slot labor-hour
//! capacity, and validates manual moves against activity locks. The crate
//! never assigns work on its own: it validates a requested placement and
//! reports its consequences.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Activity`, `Vehicle`, `Slot`, `Shift`,
//!   `CapacityTable`, `ScheduleSnapshot`
//! - **`store`**: `ScheduleStore`, sole owner of board state
//! - **`allocation`**: Planned vs. available hours per slot, overallocation
//! - **`proximity`**: Closeness rank of a candidate slot to an activity's optimum
//! - **`planner`**: Lock-aware move/lock commands, queries and drag previews
//! - **`validation`**: Input integrity checks (duplicate IDs, ranges, capacity coverage)
//! - **`report`**: Board-wide KPIs
//! - **`config`** / **`generator`**: TOML settings and initial board seeding
//!
//! # Architecture
//!
//! Single-threaded request/response. The view layer holds read-only
//! snapshots and talks to the board only through [`planner::Planner`]'s
//! commands; everything it needs for highlighting and warnings comes from
//! the pure `allocation` and `proximity` functions.

pub mod allocation;
pub mod config;
mod error;
pub mod generator;
pub mod models;
pub mod planner;
pub mod proximity;
pub mod report;
pub mod store;
pub mod validation;

pub use error::{PlannerError, PlannerResult};
