//! Rostering domain models.
//!
//! Provides the input and output types of a scheduling run: employees
//! with day preferences, the weekly schedule grid, the assignment log,
//! and the structured events recorded while repairing unmet preferences.
//!
//! # Domain Mappings
//!
//! | u-roster | Retail | Healthcare | Hospitality |
//! |----------|--------|------------|-------------|
//! | Employee | Sales associate | Nurse | Front desk |
//! | Day | Store day | Ward day | Hotel day |
//! | Shift | Opening/closing | Early/late/night | Breakfast/dinner |
//! | Schedule | Weekly rota | Ward roster | Staff plan |

mod conflict;
mod employee;
mod schedule;

pub use conflict::{ConflictEntry, ConflictKind, ScheduleEvent, UnmetPreference, UnmetReason};
pub use employee::{DayPreference, Employee};
pub use schedule::{
    AssignmentLogEntry, Placement, Schedule, BACKFILL_RANK, SAME_DAY_ALTERNATIVE_RANK,
    SPILLOVER_RANK,
};
