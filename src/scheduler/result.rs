//! Immutable outcome of a scheduling run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{AssignmentLogEntry, ConflictEntry, ConflictKind, Schedule, UnmetPreference};

use super::SatisfactionMetrics;

/// Snapshot of a finished run.
///
/// Built once by [`ShiftScheduler`](super::ShiftScheduler) and only read
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    schedule: Schedule,
    work_counts: BTreeMap<String, usize>,
    conflicts: Vec<ConflictEntry>,
    satisfaction_metrics: SatisfactionMetrics,
    assignments: Vec<AssignmentLogEntry>,
    unresolved: Vec<UnmetPreference>,
}

impl ScheduleResult {
    pub(crate) fn new(
        schedule: Schedule,
        work_counts: BTreeMap<String, usize>,
        conflicts: Vec<ConflictEntry>,
        assignments: Vec<AssignmentLogEntry>,
        unresolved: Vec<UnmetPreference>,
    ) -> Self {
        let satisfaction_metrics = SatisfactionMetrics::from_log(&assignments);
        Self {
            schedule,
            work_counts,
            conflicts,
            satisfaction_metrics,
            assignments,
            unresolved,
        }
    }

    /// Final schedule grid.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Days worked per employee.
    pub fn work_counts(&self) -> &BTreeMap<String, usize> {
        &self.work_counts
    }

    /// Human-readable conflict log, in the order passes produced it.
    pub fn conflicts(&self) -> &[ConflictEntry] {
        &self.conflicts
    }

    /// Conflict log lines of one category.
    pub fn conflicts_of_kind(
        &self,
        kind: ConflictKind,
    ) -> impl Iterator<Item = &ConflictEntry> + '_ {
        self.conflicts.iter().filter(move |c| c.kind == kind)
    }

    /// Preference satisfaction breakdown.
    pub fn satisfaction_metrics(&self) -> &SatisfactionMetrics {
        &self.satisfaction_metrics
    }

    /// Every placement, in the order it was made.
    pub fn assignments(&self) -> &[AssignmentLogEntry] {
        &self.assignments
    }

    /// Preferred days left unplaced by the same-day pass.
    pub fn unresolved(&self) -> &[UnmetPreference] {
        &self.unresolved
    }

    /// Whether every shift reached the minimum headcount.
    pub fn is_fully_staffed(&self) -> bool {
        self.conflicts_of_kind(ConflictKind::Shortfall).next().is_none()
    }
}
