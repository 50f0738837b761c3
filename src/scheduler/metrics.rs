//! Preference satisfaction metrics.
//!
//! Reduces the assignment log of a run to the share of placements made
//! in each category.
//!
//! # Metrics
//!
//! | Metric | Ranks |
//! |--------|-------|
//! | First preference | 1 |
//! | Second preference | 2 |
//! | Third preference | 3 |
//! | Other preference | 4.. (grids with more than three shifts) |
//! | Spillover | 98 |
//! | Same-day alternative | 99 |
//! | Backfill | 100 |
//!
//! Each is `count / total_assignments * 100`. An empty log yields zeros.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{AssignmentLogEntry, Placement};

/// Percentage of placements per category.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SatisfactionMetrics {
    pub first_preference: f64,
    pub second_preference: f64,
    pub third_preference: f64,
    /// Ranked preferences beyond the third.
    pub other_preference: f64,
    pub spillover: f64,
    pub same_day_alternative: f64,
    pub backfill: f64,
    /// Number of log entries the percentages are taken over.
    pub total_assignments: usize,
}

impl SatisfactionMetrics {
    /// Computes metrics from an assignment log.
    pub fn from_log(log: &[AssignmentLogEntry]) -> Self {
        let total = log.len();
        if total == 0 {
            return Self::default();
        }

        let mut counts = [0usize; 7];
        for entry in log {
            let slot = match entry.placement {
                Placement::Preferred(1) => 0,
                Placement::Preferred(2) => 1,
                Placement::Preferred(3) => 2,
                Placement::Preferred(_) => 3,
                Placement::Spillover => 4,
                Placement::SameDayAlternative => 5,
                Placement::Backfill => 6,
            };
            counts[slot] += 1;
        }

        let pct = |n: usize| n as f64 / total as f64 * 100.0;
        Self {
            first_preference: pct(counts[0]),
            second_preference: pct(counts[1]),
            third_preference: pct(counts[2]),
            other_preference: pct(counts[3]),
            spillover: pct(counts[4]),
            same_day_alternative: pct(counts[5]),
            backfill: pct(counts[6]),
            total_assignments: total,
        }
    }

    /// Sum of all category percentages (100 for a non-empty log).
    pub fn percentage_sum(&self) -> f64 {
        self.first_preference
            + self.second_preference
            + self.third_preference
            + self.other_preference
            + self.spillover
            + self.same_day_alternative
            + self.backfill
    }

    /// Named percentages, plus `total_assignments` as a float.
    pub fn as_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("first_preference", self.first_preference),
            ("second_preference", self.second_preference),
            ("third_preference", self.third_preference),
            ("other_preference", self.other_preference),
            ("spillover", self.spillover),
            ("same_day_alternative", self.same_day_alternative),
            ("backfill", self.backfill),
            ("total_assignments", self.total_assignments as f64),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(placement: Placement) -> AssignmentLogEntry {
        AssignmentLogEntry {
            employee: "Ana".into(),
            day: "Mon".into(),
            shift: "Morning".into(),
            placement,
        }
    }

    #[test]
    fn test_metrics_empty() {
        let m = SatisfactionMetrics::from_log(&[]);
        assert_eq!(m.total_assignments, 0);
        assert!((m.first_preference - 0.0).abs() < 1e-10);
        assert!((m.backfill - 0.0).abs() < 1e-10);
        assert!((m.percentage_sum() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_breakdown() {
        let log = vec![
            entry(Placement::Preferred(1)),
            entry(Placement::Preferred(1)),
            entry(Placement::Preferred(2)),
            entry(Placement::Preferred(3)),
            entry(Placement::Spillover),
            entry(Placement::SameDayAlternative),
            entry(Placement::Backfill),
            entry(Placement::Backfill),
        ];
        let m = SatisfactionMetrics::from_log(&log);
        assert_eq!(m.total_assignments, 8);
        assert!((m.first_preference - 25.0).abs() < 1e-10);
        assert!((m.second_preference - 12.5).abs() < 1e-10);
        assert!((m.third_preference - 12.5).abs() < 1e-10);
        assert!((m.spillover - 12.5).abs() < 1e-10);
        assert!((m.same_day_alternative - 12.5).abs() < 1e-10);
        assert!((m.backfill - 25.0).abs() < 1e-10);
        assert!((m.other_preference - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_sum_to_hundred() {
        let log = vec![
            entry(Placement::Preferred(1)),
            entry(Placement::Preferred(4)),
            entry(Placement::Backfill),
        ];
        let m = SatisfactionMetrics::from_log(&log);
        assert!((m.percentage_sum() - 100.0).abs() < 1e-9);
        assert!((m.other_preference - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_metrics_as_map() {
        let m = SatisfactionMetrics::from_log(&[entry(Placement::Spillover)]);
        let map = m.as_map();
        assert!((map["spillover"] - 100.0).abs() < 1e-10);
        assert!((map["total_assignments"] - 1.0).abs() < 1e-10);
        assert_eq!(map.len(), 8);
    }
}
