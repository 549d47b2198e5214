//! Timetabling domain models.
//!
//! Provides the data types shared by the generator, the evolutionary
//! engine and the clash resolver.
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`TimeRange`] | A labelled span on the fixed daily grid |
//! | [`Slot`] | (day, time range, occupant, professor) |
//! | [`DaySchedule`] | Ordered slots of one working day |
//! | [`Timetable`] | One week for one section |
//! | [`TimetableProblem`] | Subjects, professors, labs, days, periods |

pub mod grid;
mod problem;
mod slot;

pub use grid::{GridTick, TimeRange};
pub use problem::TimetableProblem;
pub use slot::{DaySchedule, Occupant, Section, Slot, Timetable, BREAK_LABEL, LAB_LABEL};
