//! Student dataset parser.
//!
//! The dataset is header-first comma-separated text with the columns
//! `StudentID, first_name, last_name, LAB WORK 1, LAB WORK 2, LAB WORK 3,
//! PRELIM EXAM, ATTENDANCE GRADE`. Rows map to students positionally.

use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{ScoreSet, LAB_COUNT};
use crate::roster::{Roster, Student};
use crate::validation::{lab_field, parse_score, validate_score_set, ATTENDANCE_FIELD, EXAM_FIELD};

/// Header row written by [`to_dataset_string`].
pub const DATASET_HEADER: &str =
    "StudentID,first_name,last_name,LAB WORK 1,LAB WORK 2,LAB WORK 3,PRELIM EXAM,ATTENDANCE GRADE";

/// Number of columns in a dataset row.
pub const DATASET_COLUMNS: usize = 8;

const EMBEDDED_DATASET: &str = include_str!("../data/mock_data.csv");

/// A row that was not loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based line number in the source text.
    pub line: usize,
    pub reason: String,
}

/// A parsed dataset: the roster plus any rows that were skipped.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub roster: Roster,
    pub skipped: Vec<SkippedRow>,
}

/// Parse a dataset file.
pub fn parse_dataset(path: &Path) -> Result<Dataset> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset file: {}", path.display()))?;

    parse_dataset_str(&content)
        .with_context(|| format!("failed to parse dataset: {}", path.display()))
}

/// Parse dataset text.
///
/// The first non-blank line is the header and is skipped. Rows with the
/// wrong number of columns are skipped and reported; a non-numeric or
/// out-of-range score is an error naming the line.
pub fn parse_dataset_str(content: &str) -> Result<Dataset> {
    let mut students = Vec::new();
    let mut skipped = Vec::new();
    let mut header_seen = false;

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if !header_seen {
            header_seen = true;
            continue;
        }

        let cells: Vec<&str> = line.split(',').map(str::trim).collect();
        if cells.len() != DATASET_COLUMNS {
            let reason = format!(
                "expected {DATASET_COLUMNS} columns, found {}",
                cells.len()
            );
            tracing::warn!("skipping dataset line {line_no}: {reason}");
            skipped.push(SkippedRow {
                line: line_no,
                reason,
            });
            continue;
        }

        let student = parse_row(&cells).with_context(|| format!("line {line_no}"))?;
        students.push(student);
    }

    tracing::debug!(
        students = students.len(),
        skipped = skipped.len(),
        "parsed dataset"
    );

    Ok(Dataset {
        roster: Roster::from_students(students),
        skipped,
    })
}

fn parse_row(cells: &[&str]) -> Result<Student> {
    let lab_scores = cells[3..3 + LAB_COUNT]
        .iter()
        .enumerate()
        .map(|(i, cell)| parse_score(&lab_field(i), cell))
        .collect::<Result<Vec<_>, _>>()?;
    let prelim = parse_score(EXAM_FIELD, cells[6])?;
    let attendance = parse_score(ATTENDANCE_FIELD, cells[7])?;

    let scores = ScoreSet::new(lab_scores, Some(prelim), attendance);
    validate_score_set(&scores)?;

    Ok(Student {
        student_id: cells[0].to_string(),
        first_name: cells[1].to_string(),
        last_name: cells[2].to_string(),
        scores,
    })
}

/// The 20-student mock dataset compiled into the crate.
pub fn embedded_dataset() -> Result<Dataset> {
    parse_dataset_str(EMBEDDED_DATASET).context("failed to parse embedded dataset")
}

/// Raw text of the embedded dataset.
pub fn embedded_dataset_str() -> &'static str {
    EMBEDDED_DATASET
}

/// Serialize a roster in the dataset format, header first.
pub fn to_dataset_string(roster: &Roster) -> String {
    let mut out = String::from(DATASET_HEADER);
    out.push('\n');
    for student in roster {
        let scores = &student.scores;
        let mut cells = vec![
            student.student_id.clone(),
            student.first_name.clone(),
            student.last_name.clone(),
        ];
        cells.extend(scores.lab_scores.iter().map(|s| s.to_string()));
        cells.push(scores.exam_score.unwrap_or(0.0).to_string());
        cells.push(scores.attendance.to_string());
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

/// Write a roster to a dataset file, through a temp file and rename so a
/// failed write leaves the old file in place.
pub fn write_dataset(path: &Path, roster: &Roster) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    let tmp_path = path.with_extension("csv.tmp");
    std::fs::write(&tmp_path, to_dataset_string(roster))
        .with_context(|| format!("failed to write dataset to {}", tmp_path.display()))?;
    std::fs::rename(&tmp_path, path)
        .with_context(|| format!("failed to replace dataset {}", path.display()))?;
    tracing::debug!(path = %path.display(), students = roster.len(), "wrote dataset");
    Ok(())
}

/// A warning from roster validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The student ID (if applicable).
    pub student_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a roster for common issues.
pub fn validate_roster(roster: &Roster) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate student IDs
    let mut seen_ids = std::collections::HashSet::new();
    for student in roster {
        if !seen_ids.insert(&student.student_id) {
            warnings.push(ValidationWarning {
                student_id: Some(student.student_id.clone()),
                message: format!("duplicate student ID: {}", student.student_id),
            });
        }
    }

    for student in roster {
        if student.student_id.is_empty() {
            warnings.push(ValidationWarning {
                student_id: None,
                message: format!("student {} has no ID", student.full_name()),
            });
        } else if !student.student_id.chars().all(|c| c.is_ascii_digit()) {
            warnings.push(ValidationWarning {
                student_id: Some(student.student_id.clone()),
                message: "student ID is not numeric".into(),
            });
        }
    }

    for student in roster {
        if student.first_name.is_empty() || student.last_name.is_empty() {
            warnings.push(ValidationWarning {
                student_id: Some(student.student_id.clone()),
                message: "first or last name is empty".into(),
            });
        }
    }

    warnings
}
