//! Input validation for board snapshots.
//!
//! Checks structural integrity of the roster and capacity table before
//! the planner accepts them. Detects:
//! - Duplicate vehicle IDs
//! - Duplicate activity IDs (fleet-wide)
//! - Slots outside the two-week horizon
//! - Non-positive or non-finite required hours
//! - Negative or non-finite capacity
//! - Capacity tables that do not cover every board slot
//!
//! All problems are collected and reported together.

use std::collections::HashSet;

use crate::models::{CapacityTable, Vehicle};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A slot day lies outside 0..=13.
    SlotOutOfRange,
    /// An activity requires zero, negative or non-finite hours.
    InvalidRequiredHours,
    /// A capacity entry is negative or non-finite.
    InvalidCapacity,
    /// Some board slots have no capacity entry.
    IncompleteCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a roster and capacity table.
///
/// Checks:
/// 1. No duplicate vehicle IDs
/// 2. No duplicate activity IDs across the whole fleet
/// 3. Every current and optimal slot lies on the board
/// 4. Every activity requires a positive, finite number of hours
/// 5. Every capacity entry lies on the board and is finite and non-negative
/// 6. The capacity table covers all 28 slots
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_snapshot(vehicles: &[Vehicle], capacity: &CapacityTable) -> ValidationResult {
    let mut errors = Vec::new();

    let mut vehicle_ids = HashSet::new();
    let mut activity_ids = HashSet::new();

    for vehicle in vehicles {
        if !vehicle_ids.insert(vehicle.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate vehicle ID: {}", vehicle.id),
            ));
        }

        for act in &vehicle.activities {
            if !activity_ids.insert(act.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate activity ID: {}", act.id),
                ));
            }

            for (label, slot) in [("current", act.current_slot()), ("optimal", act.optimal_slot())] {
                if !slot.is_in_range() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::SlotOutOfRange,
                        format!("Activity '{}' has {label} day {} off the board", act.id, slot.day),
                    ));
                }
            }

            if !(act.required_hours.is_finite() && act.required_hours > 0.0) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidRequiredHours,
                    format!(
                        "Activity '{}' requires {} hours (must be positive)",
                        act.id, act.required_hours
                    ),
                ));
            }
        }
    }

    for (slot, hours) in capacity.entries() {
        if !slot.is_in_range() {
            errors.push(ValidationError::new(
                ValidationErrorKind::SlotOutOfRange,
                format!("Capacity entry for day {} is off the board", slot.day),
            ));
        }
        if !(hours.is_finite() && hours >= 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                format!("Capacity for {slot} is {hours} (must be non-negative)"),
            ));
        }
    }

    let missing = capacity.missing_slots();
    if !missing.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::IncompleteCapacity,
            format!(
                "Capacity table is missing {} slot(s), first: {}",
                missing.len(),
                missing[0]
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
