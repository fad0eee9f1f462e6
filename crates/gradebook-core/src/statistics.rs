//! Roster summary statistics.

use serde::{Deserialize, Serialize};

use crate::model::Status;
use crate::roster::StudentGrade;

/// Summary of a graded roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSummary {
    /// Number of students graded.
    pub students: usize,
    pub passed: usize,
    pub failed: usize,
    /// Fraction of students passing, in [0, 1].
    pub pass_rate: f64,
    /// Mean of the rounded final grades.
    pub mean_final_grade: f64,
    /// Highest final grade and the student who earned it.
    pub highest: Option<GradeExtreme>,
    /// Lowest final grade and the student who earned it.
    pub lowest: Option<GradeExtreme>,
}

/// A student's position at the top or bottom of the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeExtreme {
    pub student_id: String,
    pub name: String,
    pub final_grade: i64,
}

impl GradeExtreme {
    fn from_grade(grade: &StudentGrade) -> Self {
        Self {
            student_id: grade.student.student_id.clone(),
            name: grade.student.full_name(),
            final_grade: grade.grade.final_grade,
        }
    }
}

/// Summarize graded students. Ties for highest/lowest go to the first in
/// roster order.
pub fn summarize(grades: &[StudentGrade]) -> RosterSummary {
    let students = grades.len();
    if students == 0 {
        return RosterSummary {
            students: 0,
            passed: 0,
            failed: 0,
            pass_rate: 0.0,
            mean_final_grade: 0.0,
            highest: None,
            lowest: None,
        };
    }

    let passed = grades
        .iter()
        .filter(|g| g.grade.status == Status::Pass)
        .count();
    let total: i64 = grades.iter().map(|g| g.grade.final_grade).sum();

    let mut highest = &grades[0];
    let mut lowest = &grades[0];
    for g in &grades[1..] {
        if g.grade.final_grade > highest.grade.final_grade {
            highest = g;
        }
        if g.grade.final_grade < lowest.grade.final_grade {
            lowest = g;
        }
    }

    RosterSummary {
        students,
        passed,
        failed: students - passed,
        pass_rate: passed as f64 / students as f64,
        mean_final_grade: total as f64 / students as f64,
        highest: Some(GradeExtreme::from_grade(highest)),
        lowest: Some(GradeExtreme::from_grade(lowest)),
    }
}
