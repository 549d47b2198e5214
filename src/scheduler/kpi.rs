//! Timetable quality metrics (KPIs).
//!
//! Computes summary indicators for one section's timetable.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Workload | Slots taught per listed professor |
//! | Imbalance | max(workload) - min(workload) |
//! | Fitness | 1 / (1 + imbalance) |
//! | Consecutive repeats | Slots equal to their predecessor |
//! | Lab sessions | Slots holding a lab |
//! | Unstaffed sessions | Subject slots with no professor |
//! | Break slots | Break entries across the week |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::clash_positions;
use crate::ga::workload;
use crate::models::{Occupant, Timetable};

/// Timetable performance indicators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableKpi {
    /// Slots taught per professor (every listed professor appears).
    pub workload_by_professor: HashMap<String, usize>,
    /// Busiest professor's slot count.
    pub max_workload: usize,
    /// Idlest professor's slot count.
    pub min_workload: usize,
    /// `max_workload - min_workload`.
    pub imbalance: usize,
    /// Workload-balance fitness in `(0, 1]`.
    pub fitness: f64,
    /// Slots whose occupant repeats the previous slot of the same day.
    pub consecutive_repeats: usize,
    /// Lab slots.
    pub lab_sessions: usize,
    /// Subject slots without a professor.
    pub unstaffed_sessions: usize,
    /// Break slots.
    pub break_slots: usize,
}

impl TimetableKpi {
    /// Computes KPIs for a timetable against the professor list.
    pub fn calculate(timetable: &Timetable, professors: &[String]) -> Self {
        let workload_by_professor: HashMap<String, usize> = workload(timetable, professors)
            .into_iter()
            .map(|(p, n)| (p.to_string(), n))
            .collect();
        let max_workload = workload_by_professor.values().copied().max().unwrap_or(0);
        let min_workload = workload_by_professor.values().copied().min().unwrap_or(0);
        let imbalance = max_workload - min_workload;

        let mut lab_sessions = 0;
        let mut unstaffed_sessions = 0;
        let mut break_slots = 0;
        for slot in timetable.slots() {
            match slot.occupant {
                Occupant::Lab => lab_sessions += 1,
                Occupant::Break => break_slots += 1,
                Occupant::Subject(_) if slot.professor.is_none() => unstaffed_sessions += 1,
                Occupant::Subject(_) => {}
            }
        }

        Self {
            workload_by_professor,
            max_workload,
            min_workload,
            imbalance,
            fitness: 1.0 / (1.0 + imbalance as f64),
            consecutive_repeats: timetable
                .days
                .iter()
                .map(|d| d.consecutive_repeats().len())
                .sum(),
            lab_sessions,
            unstaffed_sessions,
            break_slots,
        }
    }

    /// Whether the timetable meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_imbalance: usize, max_repeats: usize) -> bool {
        self.imbalance <= max_imbalance && self.consecutive_repeats <= max_repeats
    }
}

/// Number of clash positions between two sections' timetables.
///
/// Covers every day and slot index present in both; break slots never
/// count.
pub fn count_clashes(a: &Timetable, b: &Timetable) -> usize {
    clash_positions(a, b, a.day_count().min(b.day_count())).len()
}
