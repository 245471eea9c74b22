//! Initial board generation.
//!
//! Seeds a fresh board the way the depot planning screen does on first
//! load: a fixed fleet, each vehicle carrying one activity of every
//! maintenance kind in the catalogue, each placed at a random optimal
//! slot. Required hours and per-slot capacity are drawn from the
//! configured ranges.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::{ConfigError, GeneratorConfig};
use crate::models::{Activity, CapacityTable, ScheduleSnapshot, Shift, Slot, Vehicle, HORIZON_DAYS};

/// Maintenance kinds, indexed by `Activity::kind`.
pub const ACTIVITY_CATALOGUE: [&str; 10] = [
    "Brake Inspection",
    "Engine Maintenance",
    "Door System Check",
    "HVAC Service",
    "Electrical Systems",
    "Wheel Inspection",
    "Safety Systems Test",
    "Undercarriage Check",
    "Interior Cleaning",
    "Communication System",
];

/// Display name for an activity kind (wraps around the catalogue).
pub fn activity_name(kind: u32) -> &'static str {
    ACTIVITY_CATALOGUE[kind as usize % ACTIVITY_CATALOGUE.len()]
}

/// Generates a board using the given RNG.
///
/// Every activity starts at its optimal slot, unlocked. The capacity
/// table covers all 28 slots.
pub fn generate<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<ScheduleSnapshot, ConfigError> {
    config.validate()?;

    let prefix = config.vehicle_label.trim().to_lowercase().replace(' ', "-");
    let label = config.vehicle_label.trim();

    let vehicles: Vec<Vehicle> = (1..=config.vehicles)
        .map(|n| {
            let vehicle_id = format!("{prefix}-{n}");
            let activities: Vec<Activity> = (0..config.activities_per_vehicle)
                .map(|i| {
                    let kind = i as u32;
                    let optimal = Slot::new(rng.random_range(0..HORIZON_DAYS), random_shift(rng));
                    let hours = rng.random_range(config.min_required_hours..=config.max_required_hours);
                    Activity::new(
                        format!("activity-{vehicle_id}-{}", i + 1),
                        activity_name(kind),
                        kind,
                        optimal,
                        f64::from(hours),
                    )
                })
                .collect();

            Vehicle {
                id: vehicle_id,
                name: format!("{label} {n}"),
                activities,
            }
        })
        .collect();

    let capacity: CapacityTable = Slot::all()
        .map(|slot| {
            let hours = rng.random_range(config.min_capacity_hours..=config.max_capacity_hours);
            (slot, f64::from(hours))
        })
        .collect();

    debug!(
        vehicles = vehicles.len(),
        activities_per_vehicle = config.activities_per_vehicle,
        "generated initial board"
    );

    Ok(ScheduleSnapshot::new(vehicles, capacity))
}

/// Generates a board from the configured seed, or from entropy if unset.
pub fn generate_from_config(config: &GeneratorConfig) -> Result<ScheduleSnapshot, ConfigError> {
    match config.seed {
        Some(seed) => generate(config, &mut StdRng::seed_from_u64(seed)),
        None => generate(config, &mut rand::rng()),
    }
}

fn random_shift<R: Rng + ?Sized>(rng: &mut R) -> Shift {
    if rng.random_bool(0.5) {
        Shift::Night
    } else {
        Shift::Day
    }
}
