//! Genetic operators over whole timetables.
//!
//! - [`select_parents`]: fitness-proportional sampling of two parents,
//!   with replacement (the same parent may be drawn twice).
//! - [`crossover`]: single-point crossover over whole day schedules.
//! - [`mutate`]: redraws slots that repeat their predecessor.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::prelude::IndexedRandom;
use rand::Rng;

use super::ProfessorPool;
use crate::models::Timetable;

/// Draws two parent indices with probability proportional to `weights`.
///
/// Falls back to uniform sampling if the weights are unusable (all zero
/// or non-finite). Returns `None` for an empty population.
pub fn select_parents<R: Rng>(weights: &[f64], rng: &mut R) -> Option<(usize, usize)> {
    if weights.is_empty() {
        return None;
    }
    match WeightedIndex::new(weights) {
        Ok(dist) => Some((dist.sample(rng), dist.sample(rng))),
        Err(_) => Some((
            rng.random_range(0..weights.len()),
            rng.random_range(0..weights.len()),
        )),
    }
}

/// Single-point crossover at a random day boundary.
///
/// Timetables with at most one day have no split point; clones of the
/// parents are returned unchanged.
pub fn crossover<R: Rng>(
    parent1: &Timetable,
    parent2: &Timetable,
    rng: &mut R,
) -> (Timetable, Timetable) {
    let days = parent1.day_count();
    if days <= 1 {
        return (parent1.clone(), parent2.clone());
    }
    let point = rng.random_range(1..days);
    crossover_at(parent1, parent2, point)
}

/// Crossover at a fixed split point.
///
/// `child1 = parent1[..point] ++ parent2[point..]`, `child2` symmetric.
/// Split points past either parent's length are clamped.
pub fn crossover_at(parent1: &Timetable, parent2: &Timetable, point: usize) -> (Timetable, Timetable) {
    let p1 = point.min(parent1.days.len());
    let p2 = point.min(parent2.days.len());

    let child1 = parent1.days[..p1]
        .iter()
        .chain(&parent2.days[p2..])
        .cloned()
        .collect();
    let child2 = parent2.days[..p2]
        .iter()
        .chain(&parent1.days[p1..])
        .cloned()
        .collect();
    (Timetable::new(child1), Timetable::new(child2))
}

/// Repairs back-to-back repeats in place.
///
/// Every slot equal to its predecessor gets a freshly drawn subject (which
/// may be the same one) and a professor for it. The slot is only
/// rewritten if a professor was found. Returns the number of rewrites.
pub fn mutate<R: Rng>(
    timetable: &mut Timetable,
    subjects: &[String],
    professors: &mut ProfessorPool,
    rng: &mut R,
) -> usize {
    let mut rewrites = 0;
    for day in &mut timetable.days {
        for i in 1..day.slots.len() {
            if day.slots[i].occupant != day.slots[i - 1].occupant {
                continue;
            }
            let Some(subject) = subjects.choose(rng) else {
                continue;
            };
            if let Some(professor) = professors.staff(subject, rng) {
                day.slots[i].reassign(subject.as_str(), Some(professor));
                rewrites += 1;
            }
        }
    }
    rewrites
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::ProfessorLocking;
    use crate::models::{DaySchedule, Occupant, Slot, TimeRange};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn day(name: &str, subjects: &[&str]) -> DaySchedule {
        let mut d = DaySchedule::new(name);
        for (i, s) in subjects.iter().enumerate() {
            d.push(Slot::subject(name, TimeRange::period(9 + i as u8), *s, None));
        }
        d
    }

    fn week(tag: &str) -> Timetable {
        Timetable::new(
            ["Monday", "Tuesday", "Wednesday", "Thursday"]
                .iter()
                .map(|d| day(d, &[tag, "Math"]))
                .collect(),
        )
    }

    #[test]
    fn test_selection_frequency_tracks_fitness() {
        let weights = [1.0, 0.5, 0.25, 0.25];
        let mut rng = SmallRng::seed_from_u64(42);
        let mut hits = [0usize; 4];
        let trials = 20_000;
        for _ in 0..trials {
            let (a, b) = select_parents(&weights, &mut rng).unwrap();
            hits[a] += 1;
            hits[b] += 1;
        }
        let total = (trials * 2) as f64;
        assert!((hits[0] as f64 / total - 0.5).abs() < 0.02);
        assert!((hits[1] as f64 / total - 0.25).abs() < 0.02);
    }

    #[test]
    fn test_selection_with_replacement() {
        let mut rng = SmallRng::seed_from_u64(42);
        assert_eq!(select_parents(&[0.7], &mut rng), Some((0, 0)));
        assert_eq!(select_parents(&[], &mut rng), None);
    }

    #[test]
    fn test_selection_zero_weights_fallback() {
        let mut rng = SmallRng::seed_from_u64(42);
        let (a, b) = select_parents(&[0.0, 0.0], &mut rng).unwrap();
        assert!(a < 2 && b < 2);
    }

    #[test]
    fn test_crossover_children_mix_days() {
        let p1 = week("Art");
        let p2 = week("Music");
        let mut rng = SmallRng::seed_from_u64(42);
        let (c1, c2) = crossover(&p1, &p2, &mut rng);

        assert_eq!(c1.day_count(), 4);
        assert_eq!(c2.day_count(), 4);
        // Day 0 always comes from the own parent, the last day from the other
        assert_eq!(c1.days[0], p1.days[0]);
        assert_eq!(c1.days[3], p2.days[3]);
        assert_eq!(c2.days[0], p2.days[0]);
        assert_eq!(c2.days[3], p1.days[3]);
    }

    #[test]
    fn test_crossover_is_self_inverse() {
        let p1 = week("Art");
        let p2 = week("Music");
        for point in 1..4 {
            let (c1, c2) = crossover_at(&p1, &p2, point);
            let (back1, back2) = crossover_at(&c1, &c2, point);
            assert_eq!(back1, p1);
            assert_eq!(back2, p2);
        }
    }

    #[test]
    fn test_crossover_degenerate_single_day() {
        let p1 = Timetable::new(vec![day("Monday", &["Art"])]);
        let p2 = Timetable::new(vec![day("Monday", &["Music"])]);
        let mut rng = SmallRng::seed_from_u64(42);
        let (c1, c2) = crossover(&p1, &p2, &mut rng);
        assert_eq!(c1, p1);
        assert_eq!(c2, p2);
    }

    #[test]
    fn test_mutate_only_touches_repeats() {
        let subjects: Vec<String> = vec!["Math".into(), "Physics".into(), "Art".into()];
        let mut pool = ProfessorPool::new(&["Dr.X".to_string()], ProfessorLocking::Inert);
        let mut rng = SmallRng::seed_from_u64(42);
        let mut tt = Timetable::new(vec![day("Monday", &["Art", "Math", "Physics"])]);
        let before = tt.clone();

        assert_eq!(mutate(&mut tt, &subjects, &mut pool, &mut rng), 0);
        assert_eq!(tt, before);
    }

    #[test]
    fn test_mutate_rewrites_repeat_with_professor() {
        let subjects: Vec<String> = vec!["Math".into(), "Physics".into()];
        let mut pool = ProfessorPool::new(&["Dr.X".to_string()], ProfessorLocking::Inert);
        let mut rng = SmallRng::seed_from_u64(42);
        let mut tt = Timetable::new(vec![day("Monday", &["Art", "Art"])]);

        assert_eq!(mutate(&mut tt, &subjects, &mut pool, &mut rng), 1);
        let slot = &tt.days[0].slots[1];
        assert_ne!(slot.occupant, Occupant::subject("Art"));
        assert_eq!(slot.professor.as_deref(), Some("Dr.X"));
        assert_eq!(slot.time_range, TimeRange::period(10));
    }

    #[test]
    fn test_mutate_keeps_repeat_without_professor() {
        let subjects: Vec<String> = vec!["Math".into()];
        let mut pool = ProfessorPool::new(&["Dr.X".to_string()], ProfessorLocking::Sticky);
        pool.assign("Dr.X", "Physics");
        let mut rng = SmallRng::seed_from_u64(42);
        let mut tt = Timetable::new(vec![day("Monday", &["Art", "Art"])]);
        let before = tt.clone();

        assert_eq!(mutate(&mut tt, &subjects, &mut pool, &mut rng), 0);
        assert_eq!(tt, before);
    }
}
