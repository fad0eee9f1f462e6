//! Grading error types.
//!
//! Every validation failure is detected before any arithmetic runs and is
//! reported as one of the variants below, so callers can surface a message
//! classified by kind without string matching.

use std::fmt;

use thiserror::Error;

/// Errors raised while validating grade inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// A required numeric field is missing, non-numeric, or not finite.
    #[error("invalid input: {field} must be a valid number (got {value:?})")]
    InvalidInput { field: String, value: String },

    /// Attendance below zero.
    #[error("negative attendance: attendance cannot be negative (got {0})")]
    NegativeAttendance(f64),

    /// A lab or exam score outside [0, 100].
    #[error("out-of-range grade: {field} must be between 0 and 100 (got {value})")]
    OutOfRangeGrade { field: String, value: f64 },
}

/// Classification of a [`GradeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    NegativeAttendance,
    OutOfRangeGrade,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidInput => write!(f, "InvalidInput"),
            ErrorKind::NegativeAttendance => write!(f, "NegativeAttendance"),
            ErrorKind::OutOfRangeGrade => write!(f, "OutOfRangeGrade"),
        }
    }
}

impl GradeError {
    pub(crate) fn invalid(field: impl Into<String>, value: impl Into<String>) -> Self {
        GradeError::InvalidInput {
            field: field.into(),
            value: value.into(),
        }
    }

    pub(crate) fn out_of_range(field: impl Into<String>, value: f64) -> Self {
        GradeError::OutOfRangeGrade {
            field: field.into(),
            value,
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GradeError::InvalidInput { .. } => ErrorKind::InvalidInput,
            GradeError::NegativeAttendance(_) => ErrorKind::NegativeAttendance,
            GradeError::OutOfRangeGrade { .. } => ErrorKind::OutOfRangeGrade,
        }
    }
}

/// Errors raised by roster edits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    /// One of the identifying fields was blank.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// An identifying field holds a comma or line break, which the dataset
    /// format cannot store.
    #[error("{0} must not contain commas or line breaks")]
    InvalidCharacter(&'static str),

    /// Roster records hold a fixed number of lab scores.
    #[error("expected {expected} lab scores, found {found}")]
    LabCount { expected: usize, found: usize },

    /// A student with this ID already exists.
    #[error("duplicate student ID: {0}")]
    DuplicateId(String),

    /// No student with this ID.
    #[error("student not found: {0}")]
    NotFound(String),

    /// The new scores failed validation; the record was left unchanged.
    #[error(transparent)]
    Invalid(#[from] GradeError),
}
