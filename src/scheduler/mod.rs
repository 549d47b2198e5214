//! Two-section scheduling, clash resolution and KPI evaluation.
//!
//! # Algorithm
//!
//! `SectionScheduler` evolves sections A and B independently and then
//! hands both winners to the `ClashResolver`, which rewrites clashing
//! positions one at a time until a full scan finds none (or a pass bound
//! is reached). The result is not optimal across sections: resolution
//! ignores workload balance, so fitness is recomputed afterwards.
//!
//! # KPI
//!
//! `TimetableKpi` summarizes one timetable: per-professor workload,
//! imbalance, fitness, repeats, labs and unstaffed slots.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

mod clash;
mod kpi;
mod sections;

pub use clash::{clash_positions, ClashPosition, ClashReport, ClashResolver};
pub use kpi::{count_clashes, TimetableKpi};
pub use sections::{SectionScheduler, SectionTimetables};
