//! Error types for roster generation.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised before or while building a roster.
///
/// Staffing shortfalls and unplaceable preferences are *not* errors: they
/// are reported in the conflict log of a successful run.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Run configuration is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Employee input failed validation.
    #[error("Invalid input: {} problem(s), first: {}", .0.len(), first_message(.0))]
    InvalidInput(Vec<ValidationError>),

    /// A day name is not part of the configured week.
    #[error("Unknown day '{day}' for employee '{employee}'")]
    UnknownDay { employee: String, day: String },

    /// A shift name is not part of the configured shifts.
    #[error("Unknown shift '{shift}' for employee '{employee}' on {day}")]
    UnknownShift {
        employee: String,
        day: String,
        shift: String,
    },

    /// Ranked priorities must be positive.
    #[error("Priority for '{shift}' on {day} must be positive (employee '{employee}')")]
    InvalidPriority {
        employee: String,
        day: String,
        shift: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("none")
}

/// Result type alias for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
