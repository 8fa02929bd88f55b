//! Input validation for a generation run.
//!
//! Checks structural integrity of shows and roster before scheduling.
//! Detects:
//! - Duplicate show IDs
//! - Duplicate or empty performer names
//! - An empty roster, or one too small to staff a show

use std::collections::HashSet;

use crate::models::{CastMember, RoleCatalog, Show};

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
    /// A performer has an empty name.
    EmptyName,
    /// No performers at all.
    EmptyRoster,
    /// Fewer performers than roles per show.
    RosterTooSmall,
}

impl ValidationError {
    /// Creates an error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the inputs of a generation run.
///
/// Checks:
/// 1. No duplicate show IDs
/// 2. No duplicate performer names
/// 3. No empty performer names
/// 4. The roster is not empty
/// 5. The roster can fill every catalog role in one show
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    shows: &[Show],
    cast: &[CastMember],
    catalog: &RoleCatalog,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut show_ids = HashSet::new();
    for s in shows {
        if !show_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate show ID: {}", s.id),
            ));
        }
    }

    let mut names = HashSet::new();
    for m in cast {
        if m.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Cast member with empty name",
            ));
        } else if !names.insert(m.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate cast member: {}", m.name),
            ));
        }
    }

    if cast.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "Roster is empty",
        ));
    } else if cast.len() < catalog.role_count() {
        errors.push(ValidationError::new(
            ValidationErrorKind::RosterTooSmall,
            format!(
                "Roster has {} performers but each show needs {}",
                cast.len(),
                catalog.role_count()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
