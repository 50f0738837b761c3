//! Weekly shift rostering for the U-Engine ecosystem.
//!
//! Assigns employees to a day × shift grid from their day preferences,
//! under a weekly workload cap and a per-shift minimum headcount. Runs
//! are deterministic for a fixed seed and report every preference that
//! could not be honoured.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Employee`, `DayPreference`, `Schedule`,
//!   `Placement`, `AssignmentLogEntry`, `ScheduleEvent`, `ConflictEntry`
//! - **`scheduler`**: `ShiftScheduler`, its `Ledger`, `ConstraintChecker`,
//!   the four placement passes and `SatisfactionMetrics`
//! - **`validation`**: Input integrity checks (names, days, shifts, priorities)
//! - **`config`**: `RosterConfig`, optionally loaded from TOML
//! - **`demo_data`**: Seeded demo rosters
//!
//! # Architecture
//!
//! A pure, synchronous library: no I/O beyond optional config loading,
//! no global state. Rendering results (tables, CSV, images) is left to
//! callers; every output type is serde-serializable.
//!
//! # References
//!
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models"

pub mod config;
pub mod demo_data;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use config::RosterConfig;
pub use error::{Result, RosterError};
pub use models::{
    AssignmentLogEntry, ConflictEntry, ConflictKind, DayPreference, Employee, Placement, Schedule,
    ScheduleEvent, UnmetPreference, UnmetReason,
};
pub use scheduler::{ConstraintChecker, Ledger, SatisfactionMetrics, ScheduleResult, ShiftScheduler};
