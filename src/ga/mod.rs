//! Genetic search for one section's timetable.
//!
//! Builds random weekly timetables, scores them by professor workload
//! balance, and evolves a small population with fitness-weighted
//! selection, day-level crossover and repeat-repairing mutation.
//!
//! # Submodules
//!
//! - [`generator`]: random construction on the daily grid
//! - [`fitness`]: workload-imbalance score
//! - [`operators`]: selection, crossover, mutation
//! - [`engine`]: steady-state evolutionary loop
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//! Machine Learning", Ch. 3 (roulette-wheel selection, one-point crossover)

mod config;
pub mod engine;
pub mod fitness;
pub mod generator;
pub mod operators;
mod problem;
mod professors;

pub use config::{GaConfig, ProfessorLocking};
pub use engine::{EngineState, Evolution, Scored};
pub use fitness::{fitness, workload, workload_imbalance};
pub use generator::TimetableGenerator;
pub use operators::{crossover, crossover_at, mutate, select_parents};
pub use problem::{GaProblem, TimetableGa};
pub use professors::ProfessorPool;
