//! Two-section timetabling driver.
//!
//! Evolves one timetable per section independently, then reconciles the
//! pair with the [`ClashResolver`] so no position holds the same occupant
//! in both sections.
//!
//! # Pipeline
//!
//! 1. Validate the problem and the GA configuration.
//! 2. Section A: fresh generator, evolve for `generations`, keep the best.
//! 3. Section B: same, with its own generator and lock table.
//! 4. Resolve clashes using section A's generator for professor lookups.
//! 5. Re-score both timetables (resolution changes who teaches what).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::{ClashReport, ClashResolver};
use crate::error::TimetableError;
use crate::ga::{fitness, Evolution, GaConfig, TimetableGa};
use crate::models::{Section, Timetable, TimetableProblem};
use crate::validation::validate_problem;

/// Output of a two-section run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionTimetables {
    /// Semester label copied from the problem.
    pub semester: Option<String>,
    /// Section A's reconciled timetable.
    pub section_a: Timetable,
    /// Section B's reconciled timetable.
    pub section_b: Timetable,
    /// Section A's fitness after reconciliation.
    pub fitness_a: f64,
    /// Section B's fitness after reconciliation.
    pub fitness_b: f64,
    /// What the clash resolver did.
    pub clash_report: ClashReport,
}

impl SectionTimetables {
    /// Timetable for one section.
    pub fn timetable(&self, section: Section) -> &Timetable {
        match section {
            Section::A => &self.section_a,
            Section::B => &self.section_b,
        }
    }
}

/// Produces clash-free timetables for sections A and B.
///
/// # Example
/// ```
/// use u_timetable::ga::GaConfig;
/// use u_timetable::models::TimetableProblem;
/// use u_timetable::scheduler::SectionScheduler;
///
/// let problem = TimetableProblem::new(4)
///     .with_subjects(["Math", "Physics", "Chemistry"])
///     .with_professors(["Dr.X", "Dr.Y"])
///     .with_working_days(["Monday", "Tuesday"]);
/// let config = GaConfig::default().with_generations(10).with_seed(7);
///
/// let result = SectionScheduler::new(problem, config).unwrap().run().unwrap();
/// assert!(result.clash_report.converged);
/// ```
#[derive(Debug, Clone)]
pub struct SectionScheduler {
    problem: TimetableProblem,
    config: GaConfig,
}

impl SectionScheduler {
    /// Validates the inputs and creates a scheduler.
    pub fn new(problem: TimetableProblem, config: GaConfig) -> Result<Self, TimetableError> {
        validate_problem(&problem)?;
        config.validate()?;
        Ok(Self { problem, config })
    }

    pub fn problem(&self) -> &TimetableProblem {
        &self.problem
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs with a ChaCha8 generator seeded from the config, or from OS
    /// entropy when no seed is set.
    pub fn run(&self) -> Result<SectionTimetables, TimetableError> {
        let mut rng = match self.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        self.run_with_rng(&mut rng)
    }

    /// Runs the full pipeline with a caller-supplied generator.
    #[instrument(skip_all, fields(semester = self.problem.semester.as_deref().unwrap_or("-")))]
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> Result<SectionTimetables, TimetableError> {
        let (mut ga_a, best_a) = self.evolve_section(Section::A, rng)?;
        let (_, best_b) = self.evolve_section(Section::B, rng)?;

        let mut section_a = best_a;
        let mut section_b = best_b;
        let resolver = ClashResolver::new(&self.problem, self.config.max_clash_passes);
        let clash_report = resolver.compare_and_adjust_timetables(
            &mut section_a,
            &mut section_b,
            ga_a.generator_mut().professors_mut(),
            rng,
        );

        let fitness_a = fitness(&section_a, &self.problem.professors);
        let fitness_b = fitness(&section_b, &self.problem.professors);
        info!(
            fitness_a,
            fitness_b,
            clashes_resolved = clash_report.resolved,
            converged = clash_report.converged,
            "section timetables ready"
        );

        Ok(SectionTimetables {
            semester: self.problem.semester.clone(),
            section_a,
            section_b,
            fitness_a,
            fitness_b,
            clash_report,
        })
    }

    fn evolve_section<R: Rng>(
        &self,
        section: Section,
        rng: &mut R,
    ) -> Result<(TimetableGa, Timetable), TimetableError> {
        let ga = TimetableGa::new(self.problem.clone(), self.config.locking);
        let mut evolution = Evolution::new(ga, &self.config)?;
        let best = evolution.generate_timetable(self.config.generations, section, rng);
        Ok((evolution.into_problem(), best.individual))
    }
}
