//! Core data model types for gradebook.
//!
//! Inputs (`ScoreSet`) and the derived, immutable results the engine hands
//! back to its caller (`FinalGrade`, `RequiredExam`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum final grade that counts as passing.
pub const PASS_THRESHOLD: i64 = 75;

/// Target grade for the "passing" evaluation.
pub const PASSING_TARGET: f64 = 75.0;

/// Target grade for the "excellent" evaluation.
pub const EXCELLENT_TARGET: f64 = 100.0;

/// Lowest and highest valid lab/exam score.
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Lab works recorded per student in the roster and dataset.
pub const LAB_COUNT: usize = 3;

/// Inputs to a grade computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    /// Lab work scores, in order.
    pub lab_scores: Vec<f64>,
    /// Prelim exam score, if known.
    #[serde(default)]
    pub exam_score: Option<f64>,
    /// Attendance grade.
    pub attendance: f64,
}

impl ScoreSet {
    pub fn new(lab_scores: Vec<f64>, exam_score: Option<f64>, attendance: f64) -> Self {
        Self {
            lab_scores,
            exam_score,
            attendance,
        }
    }

    /// The score set of a freshly added student: three zero labs, zero prelim,
    /// zero attendance.
    pub fn zeroed() -> Self {
        Self::new(vec![0.0; LAB_COUNT], Some(0.0), 0.0)
    }
}

/// Pass/fail classification of a final grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    /// Classify a rounded final grade against a threshold (inclusive).
    pub fn from_grade(final_grade: i64, threshold: i64) -> Self {
        if final_grade >= threshold {
            Status::Pass
        } else {
            Status::Fail
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pass => write!(f, "PASS"),
            Status::Fail => write!(f, "FAIL"),
        }
    }
}

/// How a weighted grade is rounded to an integer final grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingPolicy {
    /// Halves round up: 74.5 becomes 75.
    #[default]
    HalfUp,
    /// Halves round to the nearest even integer: 74.5 becomes 74.
    HalfEven,
}

impl RoundingPolicy {
    pub fn apply(self, value: f64) -> i64 {
        match self {
            RoundingPolicy::HalfUp => value.round() as i64,
            RoundingPolicy::HalfEven => value.round_ties_even() as i64,
        }
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingPolicy::HalfUp => write!(f, "half-up"),
            RoundingPolicy::HalfEven => write!(f, "half-even"),
        }
    }
}

impl FromStr for RoundingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "half-up" => Ok(RoundingPolicy::HalfUp),
            "half-even" | "bankers" => Ok(RoundingPolicy::HalfEven),
            other => Err(format!("unknown rounding policy: {other}")),
        }
    }
}

/// Result of the record-system computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalGrade {
    /// Mean of the lab scores.
    pub lab_average: f64,
    /// Weighted grade before rounding.
    pub weighted_grade: f64,
    /// Rounded final grade.
    pub final_grade: i64,
    pub status: Status,
}

/// Which target grade an evaluation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Passing,
    Excellent,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Passing => write!(f, "passing"),
            Target::Excellent => write!(f, "excellent"),
        }
    }
}

/// Whether a target grade can still be reached with the remaining exam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "evaluation", content = "required", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Evaluation {
    /// Would need more than a perfect exam score.
    Impossible,
    /// Reached regardless of the exam score.
    AlreadyAchieved,
    /// Reachable with this exam score.
    Achievable(f64),
}

impl Evaluation {
    /// Classify a required exam score. Exactly 0 and exactly 100 are achievable.
    pub fn classify(required: f64) -> Self {
        if required > MAX_SCORE {
            Evaluation::Impossible
        } else if required < MIN_SCORE {
            Evaluation::AlreadyAchieved
        } else {
            Evaluation::Achievable(required)
        }
    }

    pub fn is_achievable(&self) -> bool {
        matches!(self, Evaluation::Achievable(_))
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Impossible => write!(f, "IMPOSSIBLE"),
            Evaluation::AlreadyAchieved => write!(f, "ALREADY_ACHIEVED"),
            Evaluation::Achievable(required) => write!(f, "ACHIEVABLE ({required:.2})"),
        }
    }
}

/// Result of the calculator computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredExam {
    pub attendance: f64,
    pub lab_scores: Vec<f64>,
    pub lab_work_average: f64,
    pub class_standing: f64,
    /// Grade the passing evaluation aims for.
    pub passing_target: f64,
    /// Grade the excellent evaluation aims for.
    pub excellent_target: f64,
    pub required_for_passing: f64,
    pub required_for_excellent: f64,
    pub passing: Evaluation,
    pub excellent: Evaluation,
}

impl RequiredExam {
    pub fn evaluation(&self, target: Target) -> Evaluation {
        match target {
            Target::Passing => self.passing,
            Target::Excellent => self.excellent,
        }
    }

    pub fn target_grade(&self, target: Target) -> f64 {
        match target {
            Target::Passing => self.passing_target,
            Target::Excellent => self.excellent_target,
        }
    }

    pub fn required(&self, target: Target) -> f64 {
        match target {
            Target::Passing => self.required_for_passing,
            Target::Excellent => self.required_for_excellent,
        }
    }
}
