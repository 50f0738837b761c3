//! Structured scheduling events and their display projection.
//!
//! Passes communicate through [`UnmetPreference`] records and
//! [`ScheduleEvent`] values. The human-readable [`ConflictEntry`] log is
//! rendered from them for reporting and is never read back by the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a preferred placement failed, derived from ledger state at the
/// time the conflict is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmetReason {
    /// Already working another shift that day.
    AlreadyScheduled,
    /// Weekly cap reached.
    MaxDaysReached,
    /// Every preferred shift is at capacity.
    ShiftsFull,
}

/// A preferred day on which the employee could not be placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmetPreference {
    pub employee: String,
    pub day: String,
    /// Preferred shifts, most preferred first.
    pub preferences: Vec<String>,
    pub reason: UnmetReason,
}

/// Something a pass did (or failed to do) worth reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleEvent {
    /// Preferred day still unplaced after the same-day pass.
    Unresolved(UnmetPreference),
    /// Placed on a non-preferred shift of the preferred day.
    Resolved {
        employee: String,
        day: String,
        shift: String,
    },
    /// Placed on a later day instead.
    Spillover {
        employee: String,
        day: String,
        shift: String,
        original_day: String,
    },
    /// Added to an understaffed shift.
    Backfill {
        employee: String,
        day: String,
        shift: String,
        /// Headcount before backfill started on this shift.
        headcount: usize,
        minimum: usize,
    },
    /// Shift left below the minimum once the eligible pool ran out.
    Shortfall {
        day: String,
        shift: String,
        headcount: usize,
        minimum: usize,
    },
}

/// Category of a conflict log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    Unresolved,
    Resolved,
    Spillover,
    Backfill,
    Shortfall,
}

/// A categorized, human-readable conflict log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictEntry {
    pub kind: ConflictKind,
    pub message: String,
}

impl fmt::Display for UnmetReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            UnmetReason::AlreadyScheduled => "Already scheduled",
            UnmetReason::MaxDaysReached => "Max days reached",
            UnmetReason::ShiftsFull => "Preferred shifts full",
        };
        f.write_str(text)
    }
}

impl ScheduleEvent {
    /// Log category of this event.
    pub fn kind(&self) -> ConflictKind {
        match self {
            ScheduleEvent::Unresolved(_) => ConflictKind::Unresolved,
            ScheduleEvent::Resolved { .. } => ConflictKind::Resolved,
            ScheduleEvent::Spillover { .. } => ConflictKind::Spillover,
            ScheduleEvent::Backfill { .. } => ConflictKind::Backfill,
            ScheduleEvent::Shortfall { .. } => ConflictKind::Shortfall,
        }
    }

    /// Renders the display-only log line.
    pub fn to_entry(&self) -> ConflictEntry {
        ConflictEntry {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

impl fmt::Display for ScheduleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleEvent::Unresolved(unmet) => write!(
                f,
                "{}: Could not assign on {} (preferences: {}) - {}",
                unmet.employee,
                unmet.day,
                unmet.preferences.join(", "),
                unmet.reason
            ),
            ScheduleEvent::Resolved {
                employee,
                day,
                shift,
            } => write!(
                f,
                "Resolved: {employee} assigned to {shift} on {day} (alternative)"
            ),
            ScheduleEvent::Spillover {
                employee,
                day,
                shift,
                original_day,
            } => write!(
                f,
                "Spillover: {employee} assigned to {shift} on {day} (originally wanted {original_day})"
            ),
            ScheduleEvent::Backfill {
                employee,
                day,
                shift,
                headcount,
                minimum,
            } => write!(
                f,
                "Backfill: {employee} assigned to {shift} on {day} (understaffed: {headcount}/{minimum})"
            ),
            ScheduleEvent::Shortfall {
                day,
                shift,
                headcount,
                minimum,
            } => write!(
                f,
                "Warning: {shift} on {day} only has {headcount}/{minimum} employees"
            ),
        }
    }
}

impl fmt::Display for ConflictEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_rendering() {
        let event = ScheduleEvent::Unresolved(UnmetPreference {
            employee: "Ana".into(),
            day: "Wed".into(),
            preferences: vec!["Morning".into(), "Evening".into()],
            reason: UnmetReason::MaxDaysReached,
        });
        let entry = event.to_entry();
        assert_eq!(entry.kind, ConflictKind::Unresolved);
        assert_eq!(
            entry.message,
            "Ana: Could not assign on Wed (preferences: Morning, Evening) - Max days reached"
        );
    }

    #[test]
    fn test_shortfall_rendering() {
        let event = ScheduleEvent::Shortfall {
            day: "Mon".into(),
            shift: "Morning".into(),
            headcount: 1,
            minimum: 2,
        };
        assert_eq!(event.kind(), ConflictKind::Shortfall);
        assert_eq!(
            event.to_string(),
            "Warning: Morning on Mon only has 1/2 employees"
        );
    }

    #[test]
    fn test_spillover_and_backfill_rendering() {
        let spill = ScheduleEvent::Spillover {
            employee: "Ben".into(),
            day: "Thu".into(),
            shift: "Evening".into(),
            original_day: "Wed".into(),
        };
        assert!(spill.to_string().contains("originally wanted Wed"));

        let backfill = ScheduleEvent::Backfill {
            employee: "Cy".into(),
            day: "Sun".into(),
            shift: "Afternoon".into(),
            headcount: 0,
            minimum: 2,
        };
        assert_eq!(backfill.to_entry().kind, ConflictKind::Backfill);
        assert!(backfill.to_string().ends_with("(understaffed: 0/2)"));
    }
}
