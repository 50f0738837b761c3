//! The four placement passes.
//!
//! # Algorithm
//!
//! 1. **Preference placement**: employees in input order, days in
//!    canonical order; first placeable ranked shift wins.
//! 2. **Same-day alternative**: for each unmet preference, the first
//!    placeable shift *not* in the preference list (rank 99).
//! 3. **Cross-day spillover**: for each preferred day the employee is not
//!    working, the nearest following day (wrapping) with a placeable
//!    shift, preferred shifts first (rank 98).
//! 4. **Minimum-staffing backfill**: shuffle the eligible pool with the
//!    run's seeded RNG and take from the front until the minimum is met
//!    (rank 100).
//!
//! Each pass runs once. Later passes never displace earlier placements,
//! and remaining capacity only shrinks, so no earlier pass needs to run
//! again.
//!
//! # Complexity
//! O(e * d * s) per pass, where e=employees, d=days, s=shifts.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::models::{Employee, Placement, ScheduleEvent, UnmetPreference};

use super::{ConstraintChecker, Ledger};

/// Read-only inputs shared by every pass of a run.
#[derive(Debug, Clone, Copy)]
pub struct PassContext<'a> {
    pub employees: &'a [Employee],
    pub config: &'a RosterConfig,
    pub checker: ConstraintChecker,
}

impl<'a> PassContext<'a> {
    /// Creates a context for the given employees and configuration.
    pub fn new(employees: &'a [Employee], config: &'a RosterConfig) -> Self {
        Self {
            employees,
            config,
            checker: ConstraintChecker::new(config),
        }
    }
}

/// Pass 1: places every employee on their preferred shifts.
///
/// Returns the preferred days that could not be placed, with the reason
/// derived from ledger state when the failure is recorded.
pub fn place_preferences(
    ctx: &PassContext<'_>,
    ledger: &mut Ledger,
) -> Result<Vec<UnmetPreference>> {
    let mut unmet = Vec::new();

    for emp in ctx.employees {
        for (d, day) in ctx.config.days.iter().enumerate() {
            let prefs = emp.preferred_shift_indices(day, ctx.config)?;
            if prefs.is_empty() {
                continue;
            }

            let chosen = prefs
                .iter()
                .position(|&s| ctx.checker.can_place(ledger, &emp.name, d, s));

            match chosen {
                Some(idx) => {
                    ledger.place(&emp.name, d, prefs[idx], Placement::Preferred(idx as u32 + 1));
                }
                None => unmet.push(UnmetPreference {
                    employee: emp.name.clone(),
                    day: day.clone(),
                    preferences: prefs.iter().map(|&s| ctx.config.shifts[s].clone()).collect(),
                    reason: ctx.checker.unmet_reason(ledger, &emp.name, d),
                }),
            }
        }
    }

    Ok(unmet)
}

/// Pass 2: retries each unmet preference on a non-preferred shift of the
/// same day.
///
/// Returns the resolution events and the preferences still unmet.
pub fn resolve_same_day(
    ctx: &PassContext<'_>,
    ledger: &mut Ledger,
    unmet: Vec<UnmetPreference>,
) -> Result<(Vec<ScheduleEvent>, Vec<UnmetPreference>)> {
    let mut events = Vec::new();
    let mut still_unmet = Vec::new();

    for record in unmet {
        let d = ctx
            .config
            .day_index(&record.day)
            .ok_or_else(|| RosterError::UnknownDay {
                employee: record.employee.clone(),
                day: record.day.clone(),
            })?;

        let alternative = ctx
            .config
            .shifts
            .iter()
            .enumerate()
            .filter(|(_, name)| !record.preferences.contains(name))
            .map(|(s, _)| s)
            .find(|&s| ctx.checker.can_place(ledger, &record.employee, d, s));

        match alternative {
            Some(s) => {
                ledger.place(&record.employee, d, s, Placement::SameDayAlternative);
                events.push(ScheduleEvent::Resolved {
                    employee: record.employee,
                    day: record.day,
                    shift: ctx.config.shifts[s].clone(),
                });
            }
            None => still_unmet.push(record),
        }
    }

    Ok((events, still_unmet))
}

/// Pass 3: moves unplaced preferred days to the nearest following day.
///
/// At most one spillover placement is made per unplaced preferred day.
pub fn spill_over(ctx: &PassContext<'_>, ledger: &mut Ledger) -> Result<Vec<ScheduleEvent>> {
    let mut events = Vec::new();
    let day_count = ctx.config.days.len();
    let shift_count = ctx.config.shifts.len();

    for emp in ctx.employees {
        if !ctx.checker.has_capacity_left(ledger, &emp.name) {
            continue;
        }

        for (d, day) in ctx.config.days.iter().enumerate() {
            let prefs = emp.preferred_shift_indices(day, ctx.config)?;
            if prefs.is_empty() || ledger.schedule().is_scheduled(d, &emp.name) {
                continue;
            }

            let order: Vec<usize> = prefs
                .iter()
                .copied()
                .chain((0..shift_count).filter(|s| !prefs.contains(s)))
                .collect();

            for offset in 1..day_count {
                let next = (d + offset) % day_count;
                let shift = order
                    .iter()
                    .copied()
                    .find(|&s| ctx.checker.can_place(ledger, &emp.name, next, s));

                if let Some(s) = shift {
                    ledger.place(&emp.name, next, s, Placement::Spillover);
                    events.push(ScheduleEvent::Spillover {
                        employee: emp.name.clone(),
                        day: ctx.config.days[next].clone(),
                        shift: ctx.config.shifts[s].clone(),
                        original_day: day.clone(),
                    });
                    break;
                }
            }
        }
    }

    Ok(events)
}

/// Pass 4: fills every shift up to the configured minimum.
///
/// Shifts that stay short once the eligible pool is exhausted produce a
/// [`ScheduleEvent::Shortfall`]; they are not retried.
pub fn backfill<R: Rng + ?Sized>(
    ctx: &PassContext<'_>,
    ledger: &mut Ledger,
    rng: &mut R,
) -> Vec<ScheduleEvent> {
    let mut events = Vec::new();
    let minimum = ctx.config.min_per_shift;

    for (d, day) in ctx.config.days.iter().enumerate() {
        for (s, shift) in ctx.config.shifts.iter().enumerate() {
            let headcount = ledger.schedule().headcount(d, s);
            if headcount >= minimum {
                continue;
            }
            let needed = minimum - headcount;

            let mut eligible: Vec<&str> = ctx
                .employees
                .iter()
                .map(|e| e.name.as_str())
                .filter(|name| ctx.checker.can_assign(ledger, name, d))
                .collect();
            eligible.shuffle(&mut *rng);

            let mut assigned = 0;
            for name in eligible.into_iter().take(needed) {
                ledger.place(name, d, s, Placement::Backfill);
                events.push(ScheduleEvent::Backfill {
                    employee: name.to_string(),
                    day: day.clone(),
                    shift: shift.clone(),
                    headcount,
                    minimum,
                });
                assigned += 1;
            }

            if assigned < needed {
                tracing::warn!(
                    day = %day,
                    shift = %shift,
                    headcount = headcount + assigned,
                    minimum,
                    "shift understaffed after backfill"
                );
                events.push(ScheduleEvent::Shortfall {
                    day: day.clone(),
                    shift: shift.clone(),
                    headcount: headcount + assigned,
                    minimum,
                });
            }
        }
    }

    events
}
