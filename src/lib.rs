//! Weekly class timetabling for the U-Engine ecosystem.
//!
//! Builds one week of classes for each of two sections on a fixed daily
//! grid, balances professor workload with a small genetic algorithm, and
//! reconciles the two sections so no slot holds the same occupant in both.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TimetableProblem`, `Timetable`,
//!   `DaySchedule`, `Slot`, `Occupant`, `TimeRange`, `Section`
//! - **`validation`**: Input integrity checks (empty lists, duplicates,
//!   period budget, lab references)
//! - **`ga`**: Random construction, fitness, operators and the
//!   steady-state evolutionary loop
//! - **`scheduler`**: Two-section driver, clash resolver, KPIs
//! - **`error`**: Crate error type
//!
//! # Example
//!
//! ```
//! use u_timetable::ga::GaConfig;
//! use u_timetable::models::TimetableProblem;
//! use u_timetable::scheduler::{count_clashes, SectionScheduler};
//!
//! let problem = TimetableProblem::new(5)
//!     .with_subjects(["Math", "Physics", "Chemistry", "Biology"])
//!     .with_professors(["Dr.X", "Dr.Y", "Dr.Z"])
//!     .with_working_days(["Monday", "Tuesday", "Wednesday"])
//!     .with_lab("Chemistry", "Tuesday");
//!
//! let scheduler = SectionScheduler::new(problem, GaConfig::default().with_seed(42))?;
//! let result = scheduler.run()?;
//! assert_eq!(count_clashes(&result.section_a, &result.section_b), 0);
//! # Ok::<(), u_timetable::error::TimetableError>(())
//! ```
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"
//! - Schaerf (1999), "A Survey of Automated Timetabling"

pub mod error;
pub mod ga;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::TimetableError;
