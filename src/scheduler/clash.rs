//! Cross-section clash resolution.
//!
//! A *clash* is the same occupant at the same day/period position in
//! both sections' timetables. Break slots never clash: they are fixed
//! grid entries shared by every section.
//!
//! # Algorithm
//!
//! Resolve one, restart all:
//!
//! 1. Scan days in order and, within each day, every slot index both
//!    days hold; stop at the first clash. Slot indices count the break,
//!    so a day with the break spans `num_periods + 1` positions.
//! 2. Draw section A's replacement from every subject except A's current
//!    one; draw section B's from what remains. If nothing remains, B
//!    falls back to A's pick (the clash survives).
//! 3. Resolve a professor for each new subject and overwrite both slots,
//!    keeping day and time range.
//! 4. Restart the scan from day 0.
//!
//! The loop ends when a full scan finds no clash, or when the pass
//! bound is hit. Positions past the end of either day are skipped.

use rand::prelude::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

use crate::ga::ProfessorPool;
use crate::models::{Timetable, TimetableProblem};

/// A day/period position in both timetables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClashPosition {
    /// Working-day index.
    pub day: usize,
    /// Slot index within the day.
    pub period: usize,
}

/// Outcome of a clash-resolution run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClashReport {
    /// Clashes rewritten (including ones whose fallback pick re-clashed).
    pub resolved: usize,
    /// Full or partial scans performed.
    pub passes: usize,
    /// Times section B had to reuse section A's pick.
    pub fallback_picks: usize,
    /// Whether a final scan found no clash.
    pub converged: bool,
    /// Clashes still present at the end.
    pub residual: Vec<ClashPosition>,
}

/// Lists every clash position between two timetables.
///
/// Scans the first `num_days` days and, within each, every slot index
/// both days hold. Break slots never clash.
pub fn clash_positions(a: &Timetable, b: &Timetable, num_days: usize) -> Vec<ClashPosition> {
    let mut clashes = Vec::new();
    for day in 0..num_days {
        for period in 0..shared_len(a, b, day) {
            if is_clash(a, b, day, period) {
                clashes.push(ClashPosition { day, period });
            }
        }
    }
    clashes
}

/// Slot indices present in both timetables on `day`.
fn shared_len(a: &Timetable, b: &Timetable, day: usize) -> usize {
    match (a.days.get(day), b.days.get(day)) {
        (Some(da), Some(db)) => da.len().min(db.len()),
        _ => 0,
    }
}

fn is_clash(a: &Timetable, b: &Timetable, day: usize, period: usize) -> bool {
    match (a.slot(day, period), b.slot(day, period)) {
        (Some(sa), Some(sb)) => !sa.occupant.is_break() && sa.occupant == sb.occupant,
        _ => false,
    }
}

/// Reconciles the two sections' timetables.
pub struct ClashResolver<'a> {
    problem: &'a TimetableProblem,
    max_passes: usize,
}

impl<'a> ClashResolver<'a> {
    /// Creates a resolver over the problem's days, periods and subjects.
    pub fn new(problem: &'a TimetableProblem, max_passes: usize) -> Self {
        Self {
            problem,
            max_passes,
        }
    }

    /// Rewrites both timetables in place until no clash remains.
    ///
    /// Takes exclusive access to both timetables for the whole call.
    /// Professors are resolved from `professors`, the lock table of the
    /// generator that owns the resolution.
    #[instrument(skip_all, fields(max_passes = self.max_passes))]
    pub fn compare_and_adjust_timetables<R: Rng>(
        &self,
        timetable_a: &mut Timetable,
        timetable_b: &mut Timetable,
        professors: &mut ProfessorPool,
        rng: &mut R,
    ) -> ClashReport {
        let mut report = ClashReport::default();
        // Positions where section A has no alternative subject at all
        let mut stuck: HashSet<ClashPosition> = HashSet::new();

        while report.passes < self.max_passes {
            report.passes += 1;
            let Some(pos) = self.first_clash(timetable_a, timetable_b, &stuck) else {
                break;
            };
            if !self.resolve_at(pos, timetable_a, timetable_b, professors, &mut report, rng) {
                warn!(day = pos.day, period = pos.period, "no alternative subject for clash");
                stuck.insert(pos);
            }
        }

        report.residual =
            clash_positions(timetable_a, timetable_b, self.problem.working_days.len());
        report.converged = report.residual.is_empty();
        if report.converged {
            debug!(resolved = report.resolved, passes = report.passes, "sections reconciled");
        } else {
            warn!(
                residual = report.residual.len(),
                passes = report.passes,
                "clash resolution stopped with clashes left"
            );
        }
        report
    }

    fn first_clash(
        &self,
        a: &Timetable,
        b: &Timetable,
        stuck: &HashSet<ClashPosition>,
    ) -> Option<ClashPosition> {
        for day in 0..self.problem.working_days.len() {
            for period in 0..shared_len(a, b, day) {
                let pos = ClashPosition { day, period };
                if is_clash(a, b, day, period) && !stuck.contains(&pos) {
                    return Some(pos);
                }
            }
        }
        None
    }

    /// Rewrites one clashing position. Returns `false` if section A has
    /// no subject to switch to.
    fn resolve_at<R: Rng>(
        &self,
        pos: ClashPosition,
        a: &mut Timetable,
        b: &mut Timetable,
        professors: &mut ProfessorPool,
        report: &mut ClashReport,
        rng: &mut R,
    ) -> bool {
        let Some(current) = a.slot(pos.day, pos.period).map(|s| s.occupant.clone()) else {
            return false;
        };
        let mut pool: Vec<&String> = self
            .problem
            .subjects
            .iter()
            .filter(|s| current.subject_name() != Some(s.as_str()))
            .collect();
        if pool.is_empty() {
            return false;
        }

        let new_a = pool.remove(rng.random_range(0..pool.len()));
        let new_b = match pool.choose(rng) {
            Some(s) => *s,
            None => {
                report.fallback_picks += 1;
                warn!(day = pos.day, period = pos.period, subject = %new_a, "subject pool exhausted");
                new_a
            }
        };

        let professor_a = professors.staff(new_a, rng);
        let professor_b = professors.staff(new_b, rng);
        if let Some(slot) = a.slot_mut(pos.day, pos.period) {
            slot.reassign(new_a.as_str(), professor_a);
        }
        if let Some(slot) = b.slot_mut(pos.day, pos.period) {
            slot.reassign(new_b.as_str(), professor_b);
        }
        report.resolved += 1;
        true
    }
}
