//! gradebook-core — Grade computation engine, student roster, and dataset format.
//!
//! The engine is pure: it validates numeric inputs, computes weighted grades,
//! inverts the weighted formula for required exam scores, and classifies the
//! result. The roster and parser modules hold the record-system side.

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod roster;
pub mod statistics;
pub mod validation;

pub use config::GradebookConfig;
pub use engine::{classify, GradeEngine};
pub use error::{ErrorKind, GradeError, RosterError};
pub use model::{Evaluation, FinalGrade, RequiredExam, ScoreSet, Status};
pub use roster::{Roster, Student, StudentGrade};
