//! Employee and shift preference model.
//!
//! An employee states, per day, either a single wanted shift or a ranked
//! set of acceptable shifts. Resolving a day's preference yields the
//! candidate shifts in the order the engine should try them.
//!
//! # Tie-breaking
//! Ranked shifts sharing a priority are ordered by the configured shift
//! order, never by map iteration order, so resolution is stable across
//! runs and storage types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::RosterConfig;
use crate::error::{Result, RosterError};

/// A preference recorded for a single day.
///
/// Serialized untagged: `"Morning"` or `{"Morning": 1, "Evening": 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayPreference {
    /// Exactly one wanted shift.
    Single(String),
    /// Shift name → priority (1 = most preferred).
    Ranked(BTreeMap<String, u32>),
}

/// An employee to be rostered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique, case-sensitive name.
    pub name: String,
    /// Day name → preference. Absent days carry no preference.
    #[serde(default)]
    pub preferences: BTreeMap<String, DayPreference>,
}

impl Employee {
    /// Creates an employee without preferences.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preferences: BTreeMap::new(),
        }
    }

    /// Records a single wanted shift for a day.
    pub fn with_single(mut self, day: impl Into<String>, shift: impl Into<String>) -> Self {
        self.preferences
            .insert(day.into(), DayPreference::Single(shift.into()));
        self
    }

    /// Records ranked shifts for a day.
    pub fn with_ranked<I, S>(mut self, day: impl Into<String>, ranked: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let ranked = ranked.into_iter().map(|(s, p)| (s.into(), p)).collect();
        self.preferences
            .insert(day.into(), DayPreference::Ranked(ranked));
        self
    }

    /// Removes any preference for a day.
    pub fn clear_day(&mut self, day: &str) {
        self.preferences.remove(day);
    }

    /// Whether the employee stated a preference for any day.
    pub fn has_preferences(&self) -> bool {
        self.preferences.values().any(|p| !p.is_empty())
    }

    /// Resolves the preferred shifts for a day, most preferred first.
    ///
    /// Returns an empty list when no preference is recorded.
    ///
    /// # Errors
    /// Fails on a day or shift outside the configured grid, or on a zero
    /// priority.
    pub fn preferences_for_day(&self, day: &str, config: &RosterConfig) -> Result<Vec<String>> {
        Ok(self
            .preferred_shift_indices(day, config)?
            .into_iter()
            .map(|s| config.shifts[s].clone())
            .collect())
    }

    /// Same as [`preferences_for_day`](Self::preferences_for_day), as
    /// indices into `config.shifts`.
    pub fn preferred_shift_indices(&self, day: &str, config: &RosterConfig) -> Result<Vec<usize>> {
        if config.day_index(day).is_none() {
            return Err(RosterError::UnknownDay {
                employee: self.name.clone(),
                day: day.to_string(),
            });
        }

        let shift_index = |shift: &str| {
            config
                .shift_index(shift)
                .ok_or_else(|| RosterError::UnknownShift {
                    employee: self.name.clone(),
                    day: day.to_string(),
                    shift: shift.to_string(),
                })
        };

        match self.preferences.get(day) {
            None => Ok(Vec::new()),
            Some(DayPreference::Single(shift)) => Ok(vec![shift_index(shift.as_str())?]),
            Some(DayPreference::Ranked(ranked)) => {
                let mut keyed = Vec::with_capacity(ranked.len());
                for (shift, &priority) in ranked {
                    if priority == 0 {
                        return Err(RosterError::InvalidPriority {
                            employee: self.name.clone(),
                            day: day.to_string(),
                            shift: shift.clone(),
                        });
                    }
                    keyed.push((priority, shift_index(shift.as_str())?));
                }
                keyed.sort_unstable();
                Ok(keyed.into_iter().map(|(_, s)| s).collect())
            }
        }
    }
}

impl DayPreference {
    /// Whether this preference names no shift at all.
    pub fn is_empty(&self) -> bool {
        match self {
            DayPreference::Single(_) => false,
            DayPreference::Ranked(ranked) => ranked.is_empty(),
        }
    }

    /// Shift names referenced by this preference, unordered.
    pub fn shifts(&self) -> Vec<&str> {
        match self {
            DayPreference::Single(shift) => vec![shift.as_str()],
            DayPreference::Ranked(ranked) => ranked.keys().map(String::as_str).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RosterConfig {
        RosterConfig::default()
    }

    #[test]
    fn test_no_preference_is_empty() {
        let emp = Employee::new("Ana");
        assert!(emp.preferences_for_day("Mon", &config()).unwrap().is_empty());
        assert!(!emp.has_preferences());
    }

    #[test]
    fn test_single_preference() {
        let emp = Employee::new("Ana").with_single("Tue", "Evening");
        assert_eq!(
            emp.preferences_for_day("Tue", &config()).unwrap(),
            vec!["Evening"]
        );
        assert!(emp.preferences_for_day("Wed", &config()).unwrap().is_empty());
    }

    #[test]
    fn test_ranked_sorted_by_priority() {
        let emp = Employee::new("Ana").with_ranked(
            "Mon",
            [("Evening", 1), ("Morning", 3), ("Afternoon", 2)],
        );
        assert_eq!(
            emp.preferences_for_day("Mon", &config()).unwrap(),
            vec!["Evening", "Afternoon", "Morning"]
        );
    }

    #[test]
    fn test_ranked_ties_follow_shift_order() {
        // BTreeMap iterates alphabetically (Afternoon, Evening, Morning);
        // ties must still resolve Morning, Afternoon, Evening.
        let emp = Employee::new("Ana").with_ranked(
            "Mon",
            [("Evening", 1), ("Morning", 1), ("Afternoon", 1)],
        );
        assert_eq!(
            emp.preferred_shift_indices("Mon", &config()).unwrap(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_unknown_shift_fails() {
        let emp = Employee::new("Ana").with_single("Mon", "Night");
        let err = emp.preferences_for_day("Mon", &config()).unwrap_err();
        assert!(matches!(err, RosterError::UnknownShift { .. }));
    }

    #[test]
    fn test_zero_priority_fails() {
        let emp = Employee::new("Ana").with_ranked("Mon", [("Morning", 0)]);
        let err = emp.preferences_for_day("Mon", &config()).unwrap_err();
        assert!(matches!(err, RosterError::InvalidPriority { .. }));
    }

    #[test]
    fn test_unknown_day_fails() {
        let emp = Employee::new("Ana");
        let err = emp.preferences_for_day("Funday", &config()).unwrap_err();
        assert!(matches!(err, RosterError::UnknownDay { .. }));
    }

    #[test]
    fn test_clear_day_and_empty_ranked() {
        let mut emp = Employee::new("Ana")
            .with_single("Mon", "Morning")
            .with_ranked("Tue", Vec::<(String, u32)>::new());
        assert!(emp.has_preferences());
        emp.clear_day("Mon");
        assert!(!emp.has_preferences());
        assert!(emp.preferences_for_day("Tue", &config()).unwrap().is_empty());
    }

    #[test]
    fn test_serde_untagged_forms() {
        let json = r#"{"name":"Ana","preferences":{"Mon":"Morning","Tue":{"Evening":1,"Morning":2}}}"#;
        let emp: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(
            emp.preferences.get("Mon"),
            Some(&DayPreference::Single("Morning".into()))
        );
        assert_eq!(
            emp.preferences_for_day("Tue", &config()).unwrap(),
            vec!["Evening", "Morning"]
        );
    }
}
