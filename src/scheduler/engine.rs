//! Multi-pass greedy roster scheduler.
//!
//! # Algorithm
//!
//! 1. Validate configuration and employee input.
//! 2. Seed the RNG from `random_seed`.
//! 3. Run the preference, same-day, spillover and backfill passes in
//!    that order, once each, over a single [`Ledger`].
//! 4. Render each pass's events into the conflict log.
//! 5. Compute satisfaction metrics from the assignment log.
//!
//! Not optimal; a fast, reproducible baseline.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::models::{ConflictEntry, Employee, ScheduleEvent};
use crate::validation::validate_employees;

use super::passes::{self, PassContext};
use super::{Ledger, ScheduleResult};

/// Weekly shift scheduler.
///
/// # Example
///
/// ```
/// use u_roster::{Employee, RosterConfig, ShiftScheduler};
///
/// let employees = vec![
///     Employee::new("Ana").with_single("Mon", "Morning"),
///     Employee::new("Ben").with_ranked("Mon", [("Morning", 1), ("Evening", 2)]),
/// ];
///
/// let scheduler = ShiftScheduler::new(RosterConfig::default().with_seed(7));
/// let result = scheduler.generate_schedule(&employees).unwrap();
///
/// assert_eq!(result.schedule().employees("Mon", "Morning"), ["Ana", "Ben"]);
/// assert!(result.work_counts()["Ana"] <= 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftScheduler {
    config: RosterConfig,
}

impl ShiftScheduler {
    /// Creates a scheduler for a configuration.
    pub fn new(config: RosterConfig) -> Self {
        Self { config }
    }

    /// Run configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Builds a roster from scratch.
    ///
    /// # Errors
    /// Returns [`RosterError::Config`] or [`RosterError::InvalidInput`] for
    /// malformed input. Unplaceable preferences and understaffed shifts are
    /// reported in the result, not as errors.
    pub fn generate_schedule(&self, employees: &[Employee]) -> Result<ScheduleResult> {
        let ledger = Ledger::new(employees, &self.config);
        self.complete(employees, ledger)
    }

    /// Runs all passes on top of an existing ledger, e.g. one holding
    /// fixed assignments made before the run.
    ///
    /// # Errors
    /// As [`generate_schedule`](Self::generate_schedule), plus
    /// [`RosterError::Config`] when the ledger was built for another grid
    /// or books an employee twice on one day.
    pub fn complete(&self, employees: &[Employee], mut ledger: Ledger) -> Result<ScheduleResult> {
        self.config.validate()?;
        ledger.validate(&self.config)?;
        validate_employees(employees, &self.config).map_err(RosterError::InvalidInput)?;

        let ctx = PassContext::new(employees, &self.config);
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.random_seed);
        let mut conflicts: Vec<ConflictEntry> = Vec::new();

        info!(
            event = "run_start",
            employees = employees.len(),
            days = self.config.days.len(),
            shifts = self.config.shifts.len(),
            seed = self.config.random_seed,
        );

        let unmet = passes::place_preferences(&ctx, &mut ledger)?;
        log_pass("preference_placement", &ledger, unmet.len());

        let (resolved, unresolved) = passes::resolve_same_day(&ctx, &mut ledger, unmet)?;
        conflicts.extend(
            unresolved
                .iter()
                .cloned()
                .map(|u| ScheduleEvent::Unresolved(u).to_entry()),
        );
        conflicts.extend(resolved.iter().map(ScheduleEvent::to_entry));
        log_pass("same_day_alternative", &ledger, resolved.len());

        let spilled = passes::spill_over(&ctx, &mut ledger)?;
        conflicts.extend(spilled.iter().map(ScheduleEvent::to_entry));
        log_pass("cross_day_spillover", &ledger, spilled.len());

        let backfilled = passes::backfill(&ctx, &mut ledger, &mut rng);
        conflicts.extend(backfilled.iter().map(ScheduleEvent::to_entry));
        log_pass("minimum_staffing_backfill", &ledger, backfilled.len());

        let (schedule, work_counts, log) = ledger.into_parts();
        let result = ScheduleResult::new(schedule, work_counts, conflicts, log, unresolved);

        info!(
            event = "run_end",
            assignments = result.satisfaction_metrics().total_assignments,
            conflicts = result.conflicts().len(),
            first_preference = result.satisfaction_metrics().first_preference,
        );

        Ok(result)
    }
}

fn log_pass(pass: &str, ledger: &Ledger, events: usize) {
    info!(
        event = "pass_end",
        pass,
        events,
        assignments = ledger.log().len(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConflictKind, Placement};

    fn scheduler() -> ShiftScheduler {
        ShiftScheduler::new(RosterConfig::default())
    }

    #[test]
    fn test_single_employee_shortfall() {
        let employees = vec![Employee::new("Ana").with_single("Mon", "Morning")];
        let result = scheduler().generate_schedule(&employees).unwrap();

        assert_eq!(result.schedule().employees("Mon", "Morning"), ["Ana"]);
        assert_eq!(result.assignments()[0].placement, Placement::Preferred(1));
        assert!(result
            .conflicts_of_kind(ConflictKind::Shortfall)
            .any(|c| c.message == "Warning: Morning on Mon only has 1/2 employees"));
        assert!(!result.is_fully_staffed());
    }

    #[test]
    fn test_second_rank_when_first_full() {
        let config = RosterConfig::default().with_shift_capacity(2);
        let employees = vec![
            Employee::new("Ana").with_single("Tue", "Morning"),
            Employee::new("Ben").with_single("Tue", "Morning"),
            Employee::new("Cy").with_ranked("Tue", [("Morning", 1), ("Afternoon", 2)]),
        ];
        let result = ShiftScheduler::new(config)
            .generate_schedule(&employees)
            .unwrap();

        assert_eq!(result.schedule().employees("Tue", "Afternoon")[0], "Cy");
        let cy: Vec<_> = result
            .assignments()
            .iter()
            .filter(|e| e.employee == "Cy" && e.day == "Tue")
            .collect();
        assert_eq!(cy.len(), 1);
        assert_eq!(cy[0].rank(), 2);
        assert!(result.unresolved().is_empty());
        assert_eq!(result.conflicts_of_kind(ConflictKind::Unresolved).count(), 0);
    }

    #[test]
    fn test_no_preferences_only_backfill() {
        let employees = vec![
            Employee::new("Ana").with_single("Mon", "Morning"),
            Employee::new("Zed"),
        ];
        let result = scheduler().generate_schedule(&employees).unwrap();

        let zed: Vec<_> = result
            .assignments()
            .iter()
            .filter(|e| e.employee == "Zed")
            .collect();
        assert!(!zed.is_empty());
        assert!(zed.iter().all(|e| e.rank() == 100));
    }

    #[test]
    fn test_fixed_assignments_are_kept() {
        let config = RosterConfig::default();
        let employees = vec![Employee::new("Ana"), Employee::new("Ben")];
        let mut ledger = Ledger::new(&employees, &config);
        ledger.place("Ana", 6, 2, Placement::Preferred(1));

        let result = scheduler().complete(&employees, ledger).unwrap();
        assert!(result
            .schedule()
            .employees("Sun", "Evening")
            .contains(&"Ana".to_string()));
        assert_eq!(result.assignments()[0].day, "Sun");
    }

    #[test]
    fn test_ledger_for_other_grid_rejected() {
        let employees = vec![Employee::new("Ana")];
        let small = RosterConfig::default().with_grid(["Mon"], ["Morning"]);
        let ledger = Ledger::new(&employees, &small);

        let err = scheduler().complete(&employees, ledger).unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
    }

    #[test]
    fn test_invalid_input_rejected() {
        let employees = vec![Employee::new("Ana"), Employee::new("Ana")];
        let err = scheduler().generate_schedule(&employees).unwrap_err();
        assert!(matches!(err, RosterError::InvalidInput(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RosterConfig::default().with_grid(Vec::<String>::new(), ["Morning"]);
        let err = ShiftScheduler::new(config).generate_schedule(&[]).unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
    }

    #[test]
    fn test_empty_roster() {
        let result = scheduler().generate_schedule(&[]).unwrap();
        assert_eq!(result.satisfaction_metrics().total_assignments, 0);
        assert_eq!(result.conflicts_of_kind(ConflictKind::Shortfall).count(), 21);
    }

    #[test]
    fn test_unresolved_conflicts_logged() {
        let config = RosterConfig::default().with_max_days(1);
        let employees = vec![Employee::new("Ana")
            .with_single("Mon", "Morning")
            .with_single("Tue", "Evening")];
        let result = ShiftScheduler::new(config)
            .generate_schedule(&employees)
            .unwrap();

        assert_eq!(result.unresolved().len(), 1);
        let line = result
            .conflicts_of_kind(ConflictKind::Unresolved)
            .next()
            .unwrap();
        assert_eq!(
            line.message,
            "Ana: Could not assign on Tue (preferences: Evening) - Max days reached"
        );
        assert_eq!(result.work_counts()["Ana"], 1);
    }
}
