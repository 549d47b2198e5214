//! Input validation for timetabling problems.
//!
//! Checks the problem before any generation begins. Detects:
//! - Empty subject, professor or working-day lists
//! - Period counts outside 1–8
//! - Duplicate names
//! - Subjects named after the reserved "Lab"/"Break" labels
//! - Lab entries naming an unknown subject or day
//!
//! Fitness is undefined without professors, so an empty professor list
//! must be rejected here rather than discovered during evolution.

use crate::models::{grid::MAX_PERIODS, TimetableProblem, BREAK_LABEL, LAB_LABEL};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No subjects given.
    EmptySubjects,
    /// No professors given.
    EmptyProfessors,
    /// No working days given.
    NoWorkingDays,
    /// Period count is zero or exceeds the daily grid.
    InvalidPeriodCount,
    /// A subject, professor or day is listed twice.
    DuplicateId,
    /// A subject uses a reserved occupant label.
    ReservedLabel,
    /// A lab entry names a subject that isn't in the subject list.
    UnknownLabSubject,
    /// A lab entry names a day that isn't a working day.
    UnknownLabDay,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a timetabling problem.
///
/// Checks:
/// 1. At least one subject, professor and working day
/// 2. `1 <= num_periods <= 8`
/// 3. No duplicate subject, professor or day names
/// 4. No subject named "Lab" or "Break"
/// 5. Every lab entry names a known subject and a working day
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &TimetableProblem) -> ValidationResult {
    let mut errors = Vec::new();

    if problem.subjects.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySubjects,
            "At least one subject is required",
        ));
    }
    if problem.professors.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProfessors,
            "At least one professor is required",
        ));
    }
    if problem.working_days.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoWorkingDays,
            "At least one working day is required",
        ));
    }
    if problem.num_periods == 0 || problem.num_periods > MAX_PERIODS {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidPeriodCount,
            format!(
                "Period count {} is outside 1..={MAX_PERIODS}",
                problem.num_periods
            ),
        ));
    }

    check_duplicates("subject", &problem.subjects, &mut errors);
    check_duplicates("professor", &problem.professors, &mut errors);
    check_duplicates("working day", &problem.working_days, &mut errors);

    for subject in &problem.subjects {
        if subject == LAB_LABEL || subject == BREAK_LABEL {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedLabel,
                format!("Subject name '{subject}' is reserved"),
            ));
        }
    }

    // Sorted so the error order doesn't depend on hash order
    let mut labs: Vec<(&String, &String)> = problem.lab_availability.iter().collect();
    labs.sort();
    for (subject, day) in labs {
        if !problem.subjects.contains(subject) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownLabSubject,
                format!("Lab entry references unknown subject '{subject}'"),
            ));
        }
        if !problem.working_days.contains(day) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownLabDay,
                format!("Lab for '{subject}' references unknown day '{day}'"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_duplicates(what: &str, names: &[String], errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {what}: {name}"),
            ));
        }
    }
}
