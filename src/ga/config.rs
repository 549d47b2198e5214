//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control one section's
//! evolutionary run and the clash resolution that follows.

use serde::{Deserialize, Serialize};

use crate::error::TimetableError;

/// How professor-subject locks evolve during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProfessorLocking {
    /// Locks are never written: every professor stays available for
    /// every subject for the whole run.
    #[default]
    Inert,
    /// The first subject a professor is placed on locks them to it for
    /// the rest of the run.
    Sticky,
}

/// Configuration for the timetable GA.
///
/// # Defaults
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_timetable::ga::{GaConfig, ProfessorLocking};
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(250)
///     .with_locking(ProfessorLocking::Sticky)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of timetables kept in the population.
    pub population_size: usize,

    /// Number of `evolve` steps per section.
    pub generations: usize,

    /// Probability of mutating each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Professor lock policy.
    pub locking: ProfessorLocking,

    /// Upper bound on clash-resolver rescans.
    ///
    /// With fewer than three subjects a clash can be traded back and
    /// forth forever; the bound stops the resolver in that case.
    pub max_clash_passes: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            generations: 100,
            mutation_rate: 0.1,
            locking: ProfessorLocking::Inert,
            max_clash_passes: 10_000,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the professor lock policy.
    pub fn with_locking(mut self, locking: ProfessorLocking) -> Self {
        self.locking = locking;
        self
    }

    /// Sets the clash-resolver pass bound.
    pub fn with_max_clash_passes(mut self, passes: usize) -> Self {
        self.max_clash_passes = passes;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), TimetableError> {
        if self.population_size < 2 {
            return Err(TimetableError::InvalidGaConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TimetableError::InvalidGaConfig(
                "mutation_rate must be within 0.0..=1.0".into(),
            ));
        }
        if self.max_clash_passes == 0 {
            return Err(TimetableError::InvalidGaConfig(
                "max_clash_passes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
