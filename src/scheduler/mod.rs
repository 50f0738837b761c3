//! Multi-pass roster scheduler and satisfaction metrics.
//!
//! Provides the greedy shift scheduler, the ledger it mutates, the
//! constraint predicates it consults, and the metrics computed from its
//! assignment log.
//!
//! # Algorithm
//!
//! `ShiftScheduler` runs four one-shot passes over a single [`Ledger`]:
//! preference placement, same-day alternative, cross-day spillover and
//! seeded minimum-staffing backfill. It is not optimal, but it is fast
//! and reproducible for a fixed seed.
//!
//! # Metrics
//!
//! `SatisfactionMetrics` reports the share of placements by rank
//! category (first/second/third preference, spillover, same-day
//! alternative, backfill).

mod constraints;
mod engine;
mod ledger;
mod metrics;
pub mod passes;
mod result;

pub use constraints::ConstraintChecker;
pub use engine::ShiftScheduler;
pub use ledger::Ledger;
pub use metrics::SatisfactionMetrics;
pub use passes::PassContext;
pub use result::ScheduleResult;
