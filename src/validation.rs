//! Input validation for colony snapshots.
//!
//! Planning itself never fails, so malformed snapshots are planned as-is.
//! Drivers that want to catch bad input early can run these checks first.
//! Detects:
//! - Duplicate region names
//! - Duplicate worker or road IDs
//! - Roads with impossible health values
//! - Roads listed under a region they are not in
//! - Tiles outside their room (`x` or `y` of 50 or more)

use crate::models::Colony;
use std::collections::HashSet;
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind:?}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two workers or two roads share the same ID.
    DuplicateId,
    /// Two regions share the same room name.
    DuplicateRegion,
    /// A road has zero max health or more health than its maximum.
    InvalidHits,
    /// A road's position is in a different room than its region.
    RoadOutsideRegion,
    /// A road, task target or the anchor has a tile coordinate past the room edge.
    OutOfBounds,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a colony snapshot.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_colony(colony: &Colony) -> ValidationResult {
    let mut errors = Vec::new();

    if !colony.anchor.in_room_bounds() {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfBounds,
            format!("Colony anchor {} is outside its room", colony.anchor),
        ));
    }

    let mut region_names = HashSet::new();
    for region in &colony.regions {
        if !region_names.insert(region.name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateRegion,
                format!("Duplicate region: {}", region.name),
            ));
        }
    }

    let mut worker_ids = HashSet::new();
    for worker in &colony.workers {
        if !worker_ids.insert(worker.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate worker ID: {}", worker.id),
            ));
        }

        if let Some(task) = &worker.task {
            if !task.target.in_room_bounds() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OutOfBounds,
                    format!(
                        "Worker '{}' task target {} is outside its room",
                        worker.id, task.target
                    ),
                ));
            }
        }
    }

    let mut road_ids = HashSet::new();
    for region in &colony.regions {
        for road in &region.roads {
            if !road_ids.insert(road.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate road ID: {}", road.id),
                ));
            }

            if road.hits_max == 0 || road.hits > road.hits_max {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidHits,
                    format!(
                        "Road '{}' has hits {} of max {}",
                        road.id, road.hits, road.hits_max
                    ),
                ));
            }

            if !road.pos.in_room_bounds() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OutOfBounds,
                    format!("Road '{}' at {} is outside its room", road.id, road.pos),
                ));
            }

            if road.pos.room != region.name {
                errors.push(ValidationError::new(
                    ValidationErrorKind::RoadOutsideRegion,
                    format!(
                        "Road '{}' at {} is listed under region {}",
                        road.id, road.pos, region.name
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
