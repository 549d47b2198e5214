//! Timetabling problem input.
//!
//! Collects everything the engine needs to build a week: the subjects to
//! teach, the professors who may teach them, which day each lab subject
//! is held as a lab, the working days, and how many periods fit per day.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::grid;

/// Input for one timetabling run.
///
/// # Example
/// ```
/// use u_timetable::models::TimetableProblem;
///
/// let problem = TimetableProblem::new(5)
///     .with_subjects(["Math", "Physics", "Chemistry"])
///     .with_professors(["Dr.X", "Dr.Y"])
///     .with_working_days(["Monday", "Tuesday"])
///     .with_lab("Chemistry", "Tuesday");
/// assert!(problem.is_lab_day("Chemistry", "Tuesday"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableProblem {
    /// Subject names, in input order.
    pub subjects: Vec<String>,
    /// Professor names, in input order.
    pub professors: Vec<String>,
    /// Lab subject → the single day it is held as a lab.
    pub lab_availability: HashMap<String, String>,
    /// Working day names, in week order.
    pub working_days: Vec<String>,
    /// Teaching periods per day (1–8).
    ///
    /// The daily grid holds at most 7 teaching periods around the break;
    /// see [`daily_periods`](Self::daily_periods).
    pub num_periods: usize,
    /// Semester label carried to the output.
    pub semester: Option<String>,
}

impl TimetableProblem {
    /// Creates an empty problem with the given period count.
    pub fn new(num_periods: usize) -> Self {
        Self {
            num_periods,
            ..Self::default()
        }
    }

    /// Sets the subject list.
    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects = subjects.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the professor list.
    pub fn with_professors<I, S>(mut self, professors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.professors = professors.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the working days.
    pub fn with_working_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.working_days = days.into_iter().map(Into::into).collect();
        self
    }

    /// Registers `subject` as a lab on `day`.
    pub fn with_lab(mut self, subject: impl Into<String>, day: impl Into<String>) -> Self {
        self.lab_availability.insert(subject.into(), day.into());
        self
    }

    /// Sets the semester label.
    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = Some(semester.into());
        self
    }

    /// Teaching periods actually placed per day: `num_periods` capped at
    /// the grid's teaching capacity.
    pub fn daily_periods(&self) -> usize {
        self.num_periods.min(grid::teaching_capacity())
    }

    /// Whether `subject` is held as a lab on `day`.
    pub fn is_lab_day(&self, subject: &str, day: &str) -> bool {
        self.lab_availability
            .get(subject)
            .is_some_and(|lab_day| lab_day == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let p = TimetableProblem::new(4)
            .with_subjects(["Math", "Physics"])
            .with_professors(vec![String::from("Dr.X")])
            .with_working_days(["Monday"])
            .with_semester("Fall 2024");
        assert_eq!(p.num_periods, 4);
        assert_eq!(p.subjects, vec!["Math", "Physics"]);
        assert_eq!(p.professors, vec!["Dr.X"]);
        assert_eq!(p.semester.as_deref(), Some("Fall 2024"));
        assert!(p.lab_availability.is_empty());
    }

    #[test]
    fn test_lab_day_lookup() {
        let p = TimetableProblem::new(4).with_lab("Chemistry", "Friday");
        assert!(p.is_lab_day("Chemistry", "Friday"));
        assert!(!p.is_lab_day("Chemistry", "Monday"));
        assert!(!p.is_lab_day("Math", "Friday"));
    }

    #[test]
    fn test_daily_periods_capped_by_grid() {
        assert_eq!(TimetableProblem::new(5).daily_periods(), 5);
        assert_eq!(TimetableProblem::new(7).daily_periods(), 7);
        assert_eq!(TimetableProblem::new(8).daily_periods(), 7);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "subjects": ["Math", "Physics"],
            "professors": ["Dr.X", "Dr.Y"],
            "lab_availability": {"Physics": "Monday"},
            "working_days": ["Monday", "Tuesday"],
            "num_periods": 6
        }"#;
        let p: TimetableProblem = serde_json::from_str(json).unwrap();
        assert_eq!(p.num_periods, 6);
        assert!(p.is_lab_day("Physics", "Monday"));
        assert!(p.semester.is_none());
    }
}
