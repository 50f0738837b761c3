//! Placement constraints.
//!
//! Pure predicates over the current [`Ledger`]. Nothing is cached: every
//! answer reflects the state at the moment of the call.
//!
//! | Constraint | Scope | Passes |
//! |------------|-------|--------|
//! | One shift per day | employee × day | all |
//! | Weekly cap | employee | all (when enforced) |
//! | Shift capacity | day × shift | preference, alternative, spillover |

use crate::config::RosterConfig;
use crate::models::UnmetReason;

use super::Ledger;

/// Checks whether placements respect the run's constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintChecker {
    max_days: usize,
    enforce_cap: bool,
    shift_capacity: Option<usize>,
}

impl ConstraintChecker {
    /// Creates a checker from run configuration.
    pub fn new(config: &RosterConfig) -> Self {
        Self {
            max_days: config.max_days_per_employee,
            enforce_cap: config.enforce_weekly_cap,
            shift_capacity: config.shift_capacity,
        }
    }

    /// Whether the employee may work on `day` at all: not already
    /// scheduled that day and, when enforced, below the weekly cap.
    pub fn can_assign(&self, ledger: &Ledger, employee: &str, day: usize) -> bool {
        !ledger.schedule().is_scheduled(day, employee) && self.has_capacity_left(ledger, employee)
    }

    /// Whether the employee is below the weekly cap (always true when the
    /// cap is not enforced).
    pub fn has_capacity_left(&self, ledger: &Ledger, employee: &str) -> bool {
        !self.enforce_cap || ledger.work_count(employee) < self.max_days
    }

    /// Whether the shift is below its capacity, if one is configured.
    pub fn has_room(&self, ledger: &Ledger, day: usize, shift: usize) -> bool {
        self.shift_capacity
            .map_or(true, |cap| ledger.schedule().headcount(day, shift) < cap)
    }

    /// [`can_assign`](Self::can_assign) and [`has_room`](Self::has_room).
    pub fn can_place(&self, ledger: &Ledger, employee: &str, day: usize, shift: usize) -> bool {
        self.can_assign(ledger, employee, day) && self.has_room(ledger, day, shift)
    }

    /// Diagnoses why an employee cannot take any preferred shift on `day`.
    pub fn unmet_reason(&self, ledger: &Ledger, employee: &str, day: usize) -> UnmetReason {
        if ledger.schedule().is_scheduled(day, employee) {
            UnmetReason::AlreadyScheduled
        } else if !self.has_capacity_left(ledger, employee) {
            UnmetReason::MaxDaysReached
        } else {
            UnmetReason::ShiftsFull
        }
    }
}
