//! Timetable model.
//!
//! A [`Timetable`] is one week for one section: a [`DaySchedule`] per
//! working day, each an ordered run of [`Slot`]s on the fixed daily grid.
//!
//! # Ownership
//! A timetable belongs to the section that produced it. The clash
//! resolver is the only component that rewrites two timetables together,
//! and it does so through exclusive `&mut` borrows of both.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TimeRange;

/// Label for the reserved lab occupant.
pub const LAB_LABEL: &str = "Lab";
/// Label for the reserved break occupant.
pub const BREAK_LABEL: &str = "Break";

/// What fills a slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    /// A taught subject.
    Subject(String),
    /// A lab session (subject held on its lab day).
    Lab,
    /// The fixed midday break.
    Break,
}

impl Occupant {
    /// Creates a subject occupant.
    pub fn subject(name: impl Into<String>) -> Self {
        Occupant::Subject(name.into())
    }

    /// Display label: the subject name, `"Lab"` or `"Break"`.
    pub fn label(&self) -> &str {
        match self {
            Occupant::Subject(name) => name,
            Occupant::Lab => LAB_LABEL,
            Occupant::Break => BREAK_LABEL,
        }
    }

    /// Subject name, if this is a subject.
    pub fn subject_name(&self) -> Option<&str> {
        match self {
            Occupant::Subject(name) => Some(name),
            _ => None,
        }
    }

    #[inline]
    pub fn is_break(&self) -> bool {
        matches!(self, Occupant::Break)
    }

    #[inline]
    pub fn is_lab(&self) -> bool {
        matches!(self, Occupant::Lab)
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One cell of a timetable: who teaches what, when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Working day name.
    pub day: String,
    /// Time range on the daily grid.
    pub time_range: TimeRange,
    /// Subject, lab or break.
    pub occupant: Occupant,
    /// Assigned professor. Always `None` for breaks and labs.
    pub professor: Option<String>,
}

impl Slot {
    /// Creates a subject slot.
    pub fn subject(
        day: impl Into<String>,
        time_range: TimeRange,
        subject: impl Into<String>,
        professor: Option<String>,
    ) -> Self {
        Self {
            day: day.into(),
            time_range,
            occupant: Occupant::subject(subject),
            professor,
        }
    }

    /// Creates a lab slot (no professor).
    pub fn lab(day: impl Into<String>, time_range: TimeRange) -> Self {
        Self {
            day: day.into(),
            time_range,
            occupant: Occupant::Lab,
            professor: None,
        }
    }

    /// Creates the break slot for a day.
    pub fn break_slot(day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            time_range: TimeRange::break_time(),
            occupant: Occupant::Break,
            professor: None,
        }
    }

    /// Replaces occupant and professor, keeping day and time range.
    pub fn reassign(&mut self, subject: impl Into<String>, professor: Option<String>) {
        self.occupant = Occupant::subject(subject);
        self.professor = professor;
    }
}

/// Ordered slots of one working day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Working day name.
    pub day: String,
    /// Slots in ascending time order.
    pub slots: Vec<Slot>,
}

impl DaySchedule {
    /// Creates an empty day.
    pub fn new(day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            slots: Vec::new(),
        }
    }

    /// Appends a slot.
    pub fn push(&mut self, slot: Slot) {
        self.slots.push(slot);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot at a position, if present.
    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Number of non-break slots.
    pub fn period_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.occupant.is_break()).count()
    }

    /// Whether the day contains a break slot.
    pub fn has_break(&self) -> bool {
        self.slots.iter().any(|s| s.occupant.is_break())
    }

    /// Occupant labels in order.
    pub fn occupant_labels(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.occupant.label()).collect()
    }

    /// Indices `i >= 1` whose occupant repeats the previous slot's.
    pub fn consecutive_repeats(&self) -> Vec<usize> {
        self.slots
            .windows(2)
            .enumerate()
            .filter(|(_, w)| w[0].occupant == w[1].occupant)
            .map(|(i, _)| i + 1)
            .collect()
    }
}

/// A week of day schedules for one section, in working-day order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// One entry per working day.
    pub days: Vec<DaySchedule>,
}

impl Timetable {
    /// Creates a timetable from day schedules.
    pub fn new(days: Vec<DaySchedule>) -> Self {
        Self { days }
    }

    #[inline]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Iterates every slot of every day.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.days.iter().flat_map(|d| d.slots.iter())
    }

    /// Slot at a day/period position, if present.
    pub fn slot(&self, day: usize, period: usize) -> Option<&Slot> {
        self.days.get(day).and_then(|d| d.get(period))
    }

    /// Mutable slot at a day/period position, if present.
    pub fn slot_mut(&mut self, day: usize, period: usize) -> Option<&mut Slot> {
        self.days.get_mut(day).and_then(|d| d.slots.get_mut(period))
    }

    /// Occupant labels per day.
    pub fn occupant_grid(&self) -> Vec<Vec<&str>> {
        self.days.iter().map(|d| d.occupant_labels()).collect()
    }
}

/// Class section a timetable is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    A,
    B,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::A => f.write_str("A"),
            Section::B => f.write_str("B"),
        }
    }
}
