//! Timetable GA problem definition.
//!
//! [`GaProblem`] is the seam between the generic evolutionary loop
//! ([`Evolution`](super::Evolution)) and the timetable domain. Creation
//! and mutation take `&mut self` because they write the professor lock
//! table shared across the whole run.

use rand::Rng;

use super::{crossover, fitness, mutate, ProfessorLocking, ProfessorPool, TimetableGenerator};
use crate::models::{Timetable, TimetableProblem};

/// Defines an optimization problem for the evolutionary loop.
///
/// Fitness is maximized.
pub trait GaProblem {
    /// The candidate solution type.
    type Individual: Clone;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&mut self, rng: &mut R) -> Self::Individual;

    /// Scores an individual (higher is better).
    fn evaluate(&self, individual: &Self::Individual) -> f64;

    /// Produces two children from two parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> (Self::Individual, Self::Individual);

    /// Mutates an individual in place.
    fn mutate<R: Rng>(&mut self, individual: &mut Self::Individual, rng: &mut R);
}

/// GA problem for one section's weekly timetable.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_timetable::ga::{GaProblem, ProfessorLocking, TimetableGa};
/// use u_timetable::models::TimetableProblem;
///
/// let problem = TimetableProblem::new(3)
///     .with_subjects(["Math", "Physics"])
///     .with_professors(["Dr.X", "Dr.Y"])
///     .with_working_days(["Monday", "Tuesday"]);
/// let mut ga = TimetableGa::new(problem, ProfessorLocking::Inert);
/// let mut rng = SmallRng::seed_from_u64(42);
/// let timetable = ga.create_individual(&mut rng);
/// assert_eq!(timetable.day_count(), 2);
/// assert!(ga.evaluate(&timetable) > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct TimetableGa {
    generator: TimetableGenerator,
}

impl TimetableGa {
    /// Creates a problem with a fresh professor lock table.
    pub fn new(problem: TimetableProblem, locking: ProfessorLocking) -> Self {
        let professors = ProfessorPool::new(&problem.professors, locking);
        Self {
            generator: TimetableGenerator::new(problem, professors),
        }
    }

    /// The underlying generator.
    pub fn generator(&self) -> &TimetableGenerator {
        &self.generator
    }

    /// Mutable access to the generator (and its lock table).
    pub fn generator_mut(&mut self) -> &mut TimetableGenerator {
        &mut self.generator
    }

    /// The problem input.
    pub fn problem(&self) -> &TimetableProblem {
        self.generator.problem()
    }
}

impl GaProblem for TimetableGa {
    type Individual = Timetable;

    fn create_individual<R: Rng>(&mut self, rng: &mut R) -> Timetable {
        self.generator.generate_random_timetable(rng)
    }

    fn evaluate(&self, individual: &Timetable) -> f64 {
        fitness(individual, &self.problem().professors)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Timetable,
        parent2: &Timetable,
        rng: &mut R,
    ) -> (Timetable, Timetable) {
        crossover(parent1, parent2, rng)
    }

    fn mutate<R: Rng>(&mut self, individual: &mut Timetable, rng: &mut R) {
        let (problem, professors) = self.generator.parts_mut();
        mutate(individual, &problem.subjects, professors, rng);
    }
}
