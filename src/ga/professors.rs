//! Professor availability and subject locks.
//!
//! A professor is *available* for a subject when they hold no lock yet or
//! are already locked to that same subject. The lock table belongs to one
//! generator and is shared by every timetable built, mutated or repaired
//! during that generator's run.
//!
//! Whether locks are ever written is governed by [`ProfessorLocking`]:
//! under `Inert` the table stays empty and every professor remains
//! available for every subject.

use rand::prelude::IndexedRandom;
use rand::Rng;

use super::ProfessorLocking;

/// Professor → locked subject table.
///
/// Entries keep input order so random picks are reproducible under a
/// fixed seed.
#[derive(Debug, Clone)]
pub struct ProfessorPool {
    locks: Vec<(String, Option<String>)>,
    locking: ProfessorLocking,
}

impl ProfessorPool {
    /// Creates a pool with every professor unlocked.
    pub fn new(professors: &[String], locking: ProfessorLocking) -> Self {
        Self {
            locks: professors.iter().map(|p| (p.clone(), None)).collect(),
            locking,
        }
    }

    /// Professor names in input order.
    pub fn professors(&self) -> impl Iterator<Item = &str> {
        self.locks.iter().map(|(p, _)| p.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }

    pub fn locking(&self) -> ProfessorLocking {
        self.locking
    }

    /// Subject a professor is locked to, if any.
    pub fn lock_of(&self, professor: &str) -> Option<&str> {
        self.locks
            .iter()
            .find(|(p, _)| p == professor)
            .and_then(|(_, s)| s.as_deref())
    }

    /// Professors who may teach `subject`.
    pub fn available_for(&self, subject: &str) -> Vec<&str> {
        self.locks
            .iter()
            .filter(|(_, locked)| locked.as_deref().map_or(true, |s| s == subject))
            .map(|(p, _)| p.as_str())
            .collect()
    }

    /// Picks an available professor uniformly at random.
    ///
    /// Returns `None` when nobody is available. Does not write a lock.
    pub fn get_available_professor<R: Rng>(&self, subject: &str, rng: &mut R) -> Option<String> {
        self.available_for(subject)
            .choose(rng)
            .map(|p| (*p).to_string())
    }

    /// Records that `professor` now teaches `subject`.
    ///
    /// Only has an effect under [`ProfessorLocking::Sticky`], and only for
    /// an unlocked professor.
    pub fn assign(&mut self, professor: &str, subject: &str) {
        if self.locking == ProfessorLocking::Inert {
            return;
        }
        if let Some((_, lock)) = self.locks.iter_mut().find(|(p, _)| p == professor) {
            if lock.is_none() {
                *lock = Some(subject.to_string());
            }
        }
    }

    /// Picks an available professor and records the assignment.
    pub fn staff<R: Rng>(&mut self, subject: &str, rng: &mut R) -> Option<String> {
        let professor = self.get_available_professor(subject, rng)?;
        self.assign(&professor, subject);
        Some(professor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_inert_never_locks() {
        let mut pool = ProfessorPool::new(&names(&["Dr.X", "Dr.Y"]), ProfessorLocking::Inert);
        assert_eq!(pool.locking(), ProfessorLocking::Inert);
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            assert!(pool.staff("Math", &mut rng).is_some());
        }
        assert!(pool.lock_of("Dr.X").is_none());
        assert!(pool.lock_of("Dr.Y").is_none());
        assert_eq!(pool.available_for("Physics").len(), 2);
    }

    #[test]
    fn test_sticky_locks_first_subject() {
        let mut pool = ProfessorPool::new(&names(&["Dr.X", "Dr.Y"]), ProfessorLocking::Sticky);
        assert_eq!(pool.locking(), ProfessorLocking::Sticky);
        pool.assign("Dr.X", "Math");
        pool.assign("Dr.X", "Physics");
        assert_eq!(pool.lock_of("Dr.X"), Some("Math"));
        assert_eq!(pool.available_for("Math"), vec!["Dr.X", "Dr.Y"]);
        assert_eq!(pool.available_for("Physics"), vec!["Dr.Y"]);
    }

    #[test]
    fn test_exhausted_choice_returns_none() {
        let mut pool = ProfessorPool::new(&names(&["Dr.X"]), ProfessorLocking::Sticky);
        let mut rng = SmallRng::seed_from_u64(42);
        assert_eq!(pool.staff("Math", &mut rng).as_deref(), Some("Dr.X"));
        assert!(pool.get_available_professor("Physics", &mut rng).is_none());
        assert!(pool.staff("Physics", &mut rng).is_none());
    }

    #[test]
    fn test_pick_is_uniform_enough() {
        let pool = ProfessorPool::new(&names(&["Dr.X", "Dr.Y"]), ProfessorLocking::Inert);
        let mut rng = SmallRng::seed_from_u64(42);
        let x_count = (0..1000)
            .filter(|_| pool.get_available_professor("Math", &mut rng).as_deref() == Some("Dr.X"))
            .count();
        assert!((400..600).contains(&x_count), "x_count = {x_count}");
    }

    #[test]
    fn test_unknown_professor_assign_is_ignored() {
        let mut pool = ProfessorPool::new(&names(&["Dr.X"]), ProfessorLocking::Sticky);
        pool.assign("Dr.Nobody", "Math");
        assert_eq!(pool.professors().collect::<Vec<_>>(), vec!["Dr.X"]);
        assert!(pool.lock_of("Dr.X").is_none());
    }
}
