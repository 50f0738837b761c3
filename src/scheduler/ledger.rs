//! Mutable assignment state of one scheduling run.
//!
//! The ledger owns the schedule grid, per-employee day counts and the
//! chronological assignment log. Every pass receives it explicitly as
//! `&mut Ledger`; nothing else mutates scheduling state.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::models::{AssignmentLogEntry, Employee, Placement, Schedule};

/// Schedule grid, work counts and assignment log of a run.
#[derive(Debug, Clone)]
pub struct Ledger {
    schedule: Schedule,
    work_counts: BTreeMap<String, usize>,
    log: Vec<AssignmentLogEntry>,
}

impl Ledger {
    /// Creates an empty ledger with a zero count for every employee.
    pub fn new(employees: &[Employee], config: &RosterConfig) -> Self {
        Self {
            schedule: Schedule::new(&config.days, &config.shifts),
            work_counts: employees.iter().map(|e| (e.name.clone(), 0)).collect(),
            log: Vec::new(),
        }
    }

    /// Current schedule grid.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Days assigned so far, per employee.
    pub fn work_counts(&self) -> &BTreeMap<String, usize> {
        &self.work_counts
    }

    /// Days assigned so far to one employee (0 if unknown).
    pub fn work_count(&self, employee: &str) -> usize {
        self.work_counts.get(employee).copied().unwrap_or(0)
    }

    /// Placements in the order they were made.
    pub fn log(&self) -> &[AssignmentLogEntry] {
        &self.log
    }

    /// Places an employee on a shift.
    ///
    /// Callers check [`ConstraintChecker`](super::ConstraintChecker)
    /// first; the ledger records whatever it is given. A ledger filled by
    /// hand is checked by [`validate`](Self::validate) before a run.
    ///
    /// # Panics
    /// Panics if `day` or `shift` is outside the grid.
    pub fn place(&mut self, employee: &str, day: usize, shift: usize, placement: Placement) {
        debug_assert!(!self.schedule.is_scheduled(day, employee));

        self.schedule.push(day, shift, employee);
        *self.work_counts.entry(employee.to_string()).or_insert(0) += 1;

        let entry = AssignmentLogEntry {
            employee: employee.to_string(),
            day: self.schedule.days()[day].clone(),
            shift: self.schedule.shifts()[shift].clone(),
            placement,
        };
        debug!(
            employee = %entry.employee,
            day = %entry.day,
            shift = %entry.shift,
            rank = placement.rank(),
            "placed"
        );
        self.log.push(entry);
    }

    /// Checks that the ledger fits a configuration: same day and shift
    /// grid, and no employee placed twice on one day.
    ///
    /// # Errors
    /// Returns [`RosterError::Config`] describing the first mismatch.
    pub fn validate(&self, config: &RosterConfig) -> Result<()> {
        if self.schedule.days() != config.days.as_slice()
            || self.schedule.shifts() != config.shifts.as_slice()
        {
            return Err(RosterError::Config(format!(
                "ledger grid {:?} x {:?} does not match configured {:?} x {:?}",
                self.schedule.days(),
                self.schedule.shifts(),
                config.days,
                config.shifts
            )));
        }

        let mut seen = HashSet::new();
        for (day, _, names) in self.schedule.iter() {
            for name in names {
                if !seen.insert((day, name.as_str())) {
                    return Err(RosterError::Config(format!(
                        "{name} is placed more than once on {day}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Consumes the ledger into its schedule, counts and log.
    pub fn into_parts(self) -> (Schedule, BTreeMap<String, usize>, Vec<AssignmentLogEntry>) {
        (self.schedule, self.work_counts, self.log)
    }
}
