//! Weekly schedule grid and assignment log.
//!
//! The grid maps day → shift → employee names in assignment order.
//! Each placement is also appended to a log tagged with how it was made,
//! which is the only input to the satisfaction metrics.

use serde::{Deserialize, Serialize};

/// Rank code for a spillover placement.
pub const SPILLOVER_RANK: u32 = 98;
/// Rank code for a same-day alternative placement.
pub const SAME_DAY_ALTERNATIVE_RANK: u32 = 99;
/// Rank code for a backfill placement.
pub const BACKFILL_RANK: u32 = 100;

/// A day × shift grid of assigned employee names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    days: Vec<String>,
    shifts: Vec<String>,
    /// `cells[day][shift]`, names in assignment order.
    cells: Vec<Vec<Vec<String>>>,
}

impl Schedule {
    /// Creates an empty grid.
    pub fn new(days: &[String], shifts: &[String]) -> Self {
        Self {
            days: days.to_vec(),
            shifts: shifts.to_vec(),
            cells: vec![vec![Vec::new(); shifts.len()]; days.len()],
        }
    }

    /// Day names, in canonical order.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Shift names, in canonical order.
    pub fn shifts(&self) -> &[String] {
        &self.shifts
    }

    /// Employees on a shift, looked up by name. Unknown names yield an
    /// empty slice.
    pub fn employees(&self, day: &str, shift: &str) -> &[String] {
        let d = self.days.iter().position(|x| x == day);
        let s = self.shifts.iter().position(|x| x == shift);
        match (d, s) {
            (Some(d), Some(s)) => &self.cells[d][s],
            _ => &[],
        }
    }

    /// Headcount of a shift.
    #[inline]
    pub fn headcount(&self, day: usize, shift: usize) -> usize {
        self.cells[day][shift].len()
    }

    /// Shift an employee works on a day, if any.
    pub fn shift_of(&self, day: usize, employee: &str) -> Option<usize> {
        self.cells[day]
            .iter()
            .position(|names| names.iter().any(|n| n == employee))
    }

    /// Whether an employee works any shift on a day.
    pub fn is_scheduled(&self, day: usize, employee: &str) -> bool {
        self.shift_of(day, employee).is_some()
    }

    /// Number of cells containing an employee.
    pub fn occurrences(&self, employee: &str) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|names| names.iter().any(|n| n == employee))
            .count()
    }

    /// Total number of placements in the grid.
    pub fn assignment_count(&self) -> usize {
        self.cells.iter().flatten().map(Vec::len).sum()
    }

    /// Iterates `(day, shift, employees)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &[String])> + '_ {
        self.cells.iter().enumerate().flat_map(move |(d, row)| {
            row.iter().enumerate().map(move |(s, names)| {
                (self.days[d].as_str(), self.shifts[s].as_str(), names.as_slice())
            })
        })
    }

    pub(crate) fn push(&mut self, day: usize, shift: usize, employee: &str) {
        self.cells[day][shift].push(employee.to_string());
    }
}

/// How a placement was achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Stated preference, 1-based rank.
    Preferred(u32),
    /// Different day than the one preferred.
    Spillover,
    /// Non-preferred shift on the preferred day.
    SameDayAlternative,
    /// Added only to reach the minimum headcount.
    Backfill,
}

impl Placement {
    /// Numeric rank: 1.. for preferences, 98/99/100 for the repair passes.
    pub fn rank(self) -> u32 {
        match self {
            Placement::Preferred(rank) => rank,
            Placement::Spillover => SPILLOVER_RANK,
            Placement::SameDayAlternative => SAME_DAY_ALTERNATIVE_RANK,
            Placement::Backfill => BACKFILL_RANK,
        }
    }
}

/// One placement, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentLogEntry {
    pub employee: String,
    pub day: String,
    pub shift: String,
    pub placement: Placement,
}

impl AssignmentLogEntry {
    /// Numeric rank of the placement.
    #[inline]
    pub fn rank(&self) -> u32 {
        self.placement.rank()
    }
}
