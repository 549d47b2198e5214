//! Workload-balance fitness.
//!
//! # Score
//!
//! Every professor starts at zero sessions; each staffed slot adds one
//! to its professor. With `imbalance = max - min` over all professors
//! (idle ones included):
//!
//! ```text
//! fitness = 1 / (1 + imbalance)      ∈ (0, 1]
//! ```
//!
//! A perfectly balanced week scores exactly 1.

use std::collections::HashMap;

use crate::models::Timetable;

/// Counts staffed slots per professor.
///
/// Every listed professor appears in the result, idle ones with 0.
/// Slots naming an unlisted professor are ignored.
pub fn workload<'a>(timetable: &'a Timetable, professors: &'a [String]) -> HashMap<&'a str, usize> {
    let mut load: HashMap<&str, usize> = professors.iter().map(|p| (p.as_str(), 0)).collect();
    for professor in timetable.slots().filter_map(|s| s.professor.as_deref()) {
        if let Some(count) = load.get_mut(professor) {
            *count += 1;
        }
    }
    load
}

/// Spread between the busiest and the idlest professor.
///
/// Zero when there are no professors.
pub fn workload_imbalance(timetable: &Timetable, professors: &[String]) -> usize {
    let load = workload(timetable, professors);
    let max = load.values().copied().max().unwrap_or(0);
    let min = load.values().copied().min().unwrap_or(0);
    max - min
}

/// Fitness score in `(0, 1]`; higher is better.
pub fn fitness(timetable: &Timetable, professors: &[String]) -> f64 {
    1.0 / (1.0 + workload_imbalance(timetable, professors) as f64)
}
