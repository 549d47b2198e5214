//! Random timetable construction.
//!
//! # Algorithm
//!
//! For each working day the daily clock is walked from 9:00 to 16:00:
//!
//! 1. At 13:00 a 20-minute break is emitted. It takes one clock tick and
//!    does not count against the period budget.
//! 2. Every other hour draws a subject uniformly at random. A subject on
//!    its lab day becomes a `"Lab"` slot without a professor; otherwise a
//!    professor is resolved for it.
//! 3. Once `num_periods` teaching slots are placed the day ends, so a
//!    break only appears when teaching continues after it.
//!
//! A single linear repair pass then walks the day once: a slot repeating
//! its predecessor's occupant is redrawn with a different subject.

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::warn;

use super::ProfessorPool;
use crate::models::grid::{self, GridTick};
use crate::models::{DaySchedule, Occupant, Slot, Timetable, TimetableProblem};

/// Builds random timetables for one section.
///
/// Owns the professor lock table shared by every timetable it builds and
/// by the operators that later rewrite them.
#[derive(Debug, Clone)]
pub struct TimetableGenerator {
    problem: TimetableProblem,
    professors: ProfessorPool,
}

impl TimetableGenerator {
    /// Creates a generator over a (validated) problem.
    ///
    /// Logs a warning when the period count exceeds what the daily grid
    /// can hold.
    pub fn new(problem: TimetableProblem, professors: ProfessorPool) -> Self {
        if problem.daily_periods() < problem.num_periods {
            warn!(
                requested = problem.num_periods,
                placed = problem.daily_periods(),
                "period count exceeds the daily grid; extra periods are dropped"
            );
        }
        Self {
            problem,
            professors,
        }
    }

    /// The problem this generator builds for.
    pub fn problem(&self) -> &TimetableProblem {
        &self.problem
    }

    /// The professor lock table.
    pub fn professors(&self) -> &ProfessorPool {
        &self.professors
    }

    /// Mutable access to the professor lock table.
    pub fn professors_mut(&mut self) -> &mut ProfessorPool {
        &mut self.professors
    }

    /// Splits into the problem and the lock table, for operators that
    /// read one while writing the other.
    pub fn parts_mut(&mut self) -> (&TimetableProblem, &mut ProfessorPool) {
        (&self.problem, &mut self.professors)
    }

    /// Builds one full week: a day schedule per working day.
    pub fn generate_random_timetable<R: Rng>(&mut self, rng: &mut R) -> Timetable {
        let mut days = Vec::with_capacity(self.problem.working_days.len());
        for day in &self.problem.working_days {
            days.push(build_day(&self.problem, &mut self.professors, day, rng));
        }
        Timetable::new(days)
    }
}

fn build_day<R: Rng>(
    problem: &TimetableProblem,
    professors: &mut ProfessorPool,
    day: &str,
    rng: &mut R,
) -> DaySchedule {
    let mut schedule = DaySchedule::new(day);
    let mut placed = 0;
    let budget = problem.daily_periods();

    for tick in grid::daily_ticks() {
        if placed >= budget {
            break;
        }
        match tick {
            GridTick::Break => schedule.push(Slot::break_slot(day)),
            GridTick::Period(_) => {
                let Some(subject) = problem.subjects.choose(rng) else {
                    break;
                };
                let range = tick.time_range();
                if problem.is_lab_day(subject, day) {
                    schedule.push(Slot::lab(day, range));
                } else {
                    let professor = professors.staff(subject, rng);
                    schedule.push(Slot::subject(day, range, subject.as_str(), professor));
                }
                placed += 1;
            }
        }
    }

    repair_repeats(&mut schedule, &problem.subjects, professors, rng);
    schedule
}

/// One pass over the day: each slot equal to its predecessor is redrawn
/// with another subject. Slots with no alternative subject stay as-is.
fn repair_repeats<R: Rng>(
    schedule: &mut DaySchedule,
    subjects: &[String],
    professors: &mut ProfessorPool,
    rng: &mut R,
) {
    for j in 1..schedule.slots.len() {
        if schedule.slots[j].occupant != schedule.slots[j - 1].occupant {
            continue;
        }
        let Some(subject) = pick_other_subject(subjects, &schedule.slots[j].occupant, rng) else {
            continue;
        };
        let professor = professors.staff(subject, rng);
        schedule.slots[j].reassign(subject.as_str(), professor);
    }
}

/// Picks a subject uniformly at random, excluding the current occupant.
pub(crate) fn pick_other_subject<'a, R: Rng>(
    subjects: &'a [String],
    current: &Occupant,
    rng: &mut R,
) -> Option<&'a String> {
    let candidates: Vec<&String> = subjects
        .iter()
        .filter(|s| current.subject_name() != Some(s.as_str()))
        .collect();
    candidates.choose(rng).copied()
}
