//! Student roster: the caller-owned collection of student records.
//!
//! All edits go through `Roster` methods; there is no shared or global
//! record list.

use serde::{Deserialize, Serialize};

use crate::engine::GradeEngine;
use crate::error::{GradeError, RosterError};
use crate::model::{FinalGrade, ScoreSet, LAB_COUNT};
use crate::validation::{validate_score_set, EXAM_FIELD};

/// A single student record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub scores: ScoreSet,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A student paired with the final grade computed for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentGrade {
    pub student: Student,
    pub grade: FinalGrade,
}

/// An ordered collection of students.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from existing records, keeping their order as given.
    pub fn from_students(students: Vec<Student>) -> Self {
        Self { students }
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn get(&self, student_id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.student_id == student_id)
    }

    fn position(&self, student_id: &str) -> Result<usize, RosterError> {
        self.students
            .iter()
            .position(|s| s.student_id == student_id)
            .ok_or_else(|| RosterError::NotFound(student_id.to_string()))
    }

    /// Append a new student with all scores set to zero. Fields are trimmed
    /// and must be non-empty and free of commas and line breaks.
    pub fn add_student(
        &mut self,
        student_id: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<&Student, RosterError> {
        let student_id = identity_field("student ID", student_id)?;
        let first_name = identity_field("first name", first_name)?;
        let last_name = identity_field("last name", last_name)?;

        if self.get(student_id).is_some() {
            return Err(RosterError::DuplicateId(student_id.to_string()));
        }

        tracing::debug!(student_id, "adding student");
        self.students.push(Student {
            student_id: student_id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            scores: ScoreSet::zeroed(),
        });
        Ok(&self.students[self.students.len() - 1])
    }

    /// Remove a student, returning the removed record.
    pub fn remove_student(&mut self, student_id: &str) -> Result<Student, RosterError> {
        let index = self.position(student_id.trim())?;
        tracing::debug!(student_id, "removing student");
        Ok(self.students.remove(index))
    }

    /// Replace a student's scores. The record is unchanged if validation fails
    /// or the scores do not hold exactly [`LAB_COUNT`] labs.
    pub fn update_scores(
        &mut self,
        student_id: &str,
        scores: ScoreSet,
    ) -> Result<&Student, RosterError> {
        let index = self.position(student_id.trim())?;
        if scores.lab_scores.len() != LAB_COUNT {
            return Err(RosterError::LabCount {
                expected: LAB_COUNT,
                found: scores.lab_scores.len(),
            });
        }
        validate_score_set(&scores)?;
        if scores.exam_score.is_none() {
            return Err(GradeError::invalid(EXAM_FIELD, "").into());
        }

        tracing::debug!(student_id, "updating scores");
        self.students[index].scores = scores;
        Ok(&self.students[index])
    }

    /// Compute every student's final grade, in roster order.
    pub fn evaluate(&self, engine: &GradeEngine) -> Result<Vec<StudentGrade>, GradeError> {
        self.students
            .iter()
            .map(|student| {
                Ok(StudentGrade {
                    student: student.clone(),
                    grade: engine.final_grade(&student.scores)?,
                })
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}

fn identity_field<'a>(field: &'static str, value: &'a str) -> Result<&'a str, RosterError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(RosterError::EmptyField(field))
    } else if trimmed.contains([',', '\n', '\r']) {
        Err(RosterError::InvalidCharacter(field))
    } else {
        Ok(trimmed)
    }
}
