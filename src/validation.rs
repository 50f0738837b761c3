//! Input validation for rostering problems.
//!
//! Checks employee records against the configured grid before the
//! engine runs. Detects:
//! - Empty names
//! - Duplicate names (case-sensitive)
//! - Preference days outside the configured week
//! - Preference shifts outside the configured shifts
//! - Non-positive ranked priorities

use crate::config::RosterConfig;
use crate::models::{DayPreference, Employee};
use std::collections::HashSet;

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
    /// An employee has an empty or blank name.
    EmptyName,
    /// Two employees share the same name.
    DuplicateName,
    /// A preference is keyed by an unknown day.
    UnknownDay,
    /// A preference references an unknown shift.
    UnknownShift,
    /// A ranked priority is zero.
    InvalidPriority,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates employee records against a configuration.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_employees(employees: &[Employee], config: &RosterConfig) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for emp in employees {
        if emp.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Employee with empty name",
            ));
        } else if !names.insert(emp.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate employee name: {}", emp.name),
            ));
        }

        for (day, pref) in &emp.preferences {
            if config.day_index(day).is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDay,
                    format!("Employee '{}' has a preference for unknown day '{day}'", emp.name),
                ));
            }

            for shift in pref.shifts() {
                if config.shift_index(shift).is_none() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownShift,
                        format!(
                            "Employee '{}' references unknown shift '{shift}' on {day}",
                            emp.name
                        ),
                    ));
                }
            }

            if let DayPreference::Ranked(ranked) = pref {
                for (shift, _) in ranked.iter().filter(|(_, p)| **p == 0) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidPriority,
                        format!(
                            "Employee '{}' has non-positive priority for '{shift}' on {day}",
                            emp.name
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
