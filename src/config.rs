//! Run configuration for roster generation.
//!
//! The canonical week (7 days, 3 shifts), staffing minimum, weekly cap and
//! random seed are parameters rather than constants, so the engine can be
//! exercised on other grid sizes.
//!
//! # Examples
//!
//! ```
//! use u_roster::RosterConfig;
//!
//! let config = RosterConfig::from_toml_str(r#"
//!     random_seed = 7
//!     min_per_shift = 3
//!     enforce_weekly_cap = false
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, 7);
//! assert_eq!(config.min_per_shift, 3);
//! assert_eq!(config.days.len(), 7);
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Canonical day names, in search and presentation order.
pub const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Canonical shift names, in tie-break and presentation order.
pub const SHIFTS: [&str; 3] = ["Morning", "Afternoon", "Evening"];

/// Default minimum headcount per shift.
pub const MIN_PER_SHIFT: usize = 2;

/// Default maximum number of days an employee works per week.
pub const MAX_DAYS_PER_EMPLOYEE: usize = 5;

/// Default random seed for the backfill shuffle.
pub const DEFAULT_SEED: u64 = 42;

/// Configuration of a single scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Day names of the week, in canonical order.
    pub days: Vec<String>,
    /// Shift names of a day, in canonical order.
    pub shifts: Vec<String>,
    /// Minimum headcount each shift is backfilled to.
    pub min_per_shift: usize,
    /// Maximum days per employee per week.
    pub max_days_per_employee: usize,
    /// Whether `max_days_per_employee` is enforced.
    pub enforce_weekly_cap: bool,
    /// Seed for the backfill shuffle.
    pub random_seed: u64,
    /// Optional upper bound on headcount honoured by the preference,
    /// alternative and spillover passes. Backfill ignores it.
    pub shift_capacity: Option<usize>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            days: DAYS.iter().map(|d| d.to_string()).collect(),
            shifts: SHIFTS.iter().map(|s| s.to_string()).collect(),
            min_per_shift: MIN_PER_SHIFT,
            max_days_per_employee: MAX_DAYS_PER_EMPLOYEE,
            enforce_weekly_cap: true,
            random_seed: DEFAULT_SEED,
            shift_capacity: None,
        }
    }
}

impl RosterConfig {
    /// Creates the canonical configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the day and shift grid.
    pub fn with_grid<D, S>(mut self, days: D, shifts: S) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        self.days = days.into_iter().map(Into::into).collect();
        self.shifts = shifts.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    /// Sets the minimum headcount per shift.
    pub fn with_min_per_shift(mut self, min: usize) -> Self {
        self.min_per_shift = min;
        self
    }

    /// Sets the weekly cap.
    pub fn with_max_days(mut self, max_days: usize) -> Self {
        self.max_days_per_employee = max_days;
        self
    }

    /// Turns weekly cap enforcement on or off.
    pub fn with_weekly_cap(mut self, enforce: bool) -> Self {
        self.enforce_weekly_cap = enforce;
        self
    }

    /// Limits headcount per shift during the preference-driven passes.
    pub fn with_shift_capacity(mut self, capacity: usize) -> Self {
        self.shift_capacity = Some(capacity);
        self
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.days.is_empty() {
            return Err(RosterError::Config("at least one day is required".into()));
        }
        if self.shifts.is_empty() {
            return Err(RosterError::Config("at least one shift is required".into()));
        }
        if let Some(dup) = first_duplicate(&self.days) {
            return Err(RosterError::Config(format!("duplicate day '{dup}'")));
        }
        if let Some(dup) = first_duplicate(&self.shifts) {
            return Err(RosterError::Config(format!("duplicate shift '{dup}'")));
        }
        if let Some(capacity) = self.shift_capacity {
            if capacity == 0 || capacity < self.min_per_shift {
                return Err(RosterError::Config(format!(
                    "shift capacity {capacity} must be positive and at least min_per_shift {}",
                    self.min_per_shift
                )));
            }
        }
        Ok(())
    }

    /// Index of a day name in the configured week.
    pub fn day_index(&self, day: &str) -> Option<usize> {
        self.days.iter().position(|d| d == day)
    }

    /// Index of a shift name in the configured shifts.
    pub fn shift_index(&self, shift: &str) -> Option<usize> {
        self.shifts.iter().position(|s| s == shift)
    }
}

fn first_duplicate(names: &[String]) -> Option<&str> {
    let mut seen = HashSet::new();
    names
        .iter()
        .find(|n| !seen.insert(n.as_str()))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_canonical() {
        let config = RosterConfig::default();
        assert_eq!(config.days, DAYS);
        assert_eq!(config.shifts, SHIFTS);
        assert_eq!(config.min_per_shift, 2);
        assert_eq!(config.max_days_per_employee, 5);
        assert!(config.enforce_weekly_cap);
        assert_eq!(config.random_seed, 42);
        assert!(config.shift_capacity.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_partial_override() {
        let config = RosterConfig::from_toml_str(
            r#"
            days = ["Sat", "Sun"]
            shifts = ["Day", "Night"]
            max_days_per_employee = 1
            shift_capacity = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.days, vec!["Sat", "Sun"]);
        assert_eq!(config.shift_index("Night"), Some(1));
        assert_eq!(config.max_days_per_employee, 1);
        assert_eq!(config.shift_capacity, Some(4));
        assert_eq!(config.random_seed, DEFAULT_SEED);
    }

    #[test]
    fn test_toml_parse_error() {
        let err = RosterConfig::from_toml_str("min_per_shift = \"two\"").unwrap_err();
        assert!(matches!(err, RosterError::Toml(_)));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let config = RosterConfig::new().with_grid(["Mon", "Mon"], ["Morning"]);
        assert!(matches!(config.validate(), Err(RosterError::Config(_))));

        let config = RosterConfig::new().with_grid(["Mon"], ["A", "B", "A"]);
        assert!(matches!(config.validate(), Err(RosterError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_grid() {
        let config = RosterConfig::new().with_grid(Vec::<String>::new(), ["Morning"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_capacity_below_minimum() {
        let config = RosterConfig::new().with_shift_capacity(1);
        assert!(config.validate().is_err());
        assert!(RosterConfig::new().with_shift_capacity(2).validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let err = RosterConfig::load("/nonexistent/roster.toml").unwrap_err();
        assert!(matches!(err, RosterError::Io(_)));
    }
}
