//! Input parsing and validation.
//!
//! Checks run in a fixed order and stop at the first failure: every value
//! must be a finite number, then attendance must be non-negative, then each
//! lab and exam score must lie in [0, 100].

use crate::error::GradeError;
use crate::model::{ScoreSet, MAX_SCORE, MIN_SCORE};

pub const ATTENDANCE_FIELD: &str = "attendance";
pub const EXAM_FIELD: &str = "prelim exam";

/// Display name of the lab at `index` (zero-based).
pub fn lab_field(index: usize) -> String {
    format!("lab work {}", index + 1)
}

/// Parse user-entered text into a score.
///
/// Blank, non-numeric, and non-finite text (`NaN`, `inf`) are all
/// `InvalidInput` for `field`.
pub fn parse_score(field: &str, text: &str) -> Result<f64, GradeError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(GradeError::invalid(field, trimmed)),
    }
}

/// Parse a comma-separated list of lab scores, e.g. `"69,5,52"`.
pub fn parse_lab_scores(text: &str) -> Result<Vec<f64>, GradeError> {
    if text.trim().is_empty() {
        return Err(GradeError::invalid("lab scores", text.trim()));
    }
    text.split(',')
        .enumerate()
        .map(|(i, cell)| parse_score(&lab_field(i), cell))
        .collect()
}

fn ensure_finite(field: &str, value: f64) -> Result<(), GradeError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GradeError::invalid(field, value.to_string()))
    }
}

fn ensure_in_range(field: &str, value: f64) -> Result<(), GradeError> {
    if (MIN_SCORE..=MAX_SCORE).contains(&value) {
        Ok(())
    } else {
        Err(GradeError::out_of_range(field, value))
    }
}

/// Validate calculator inputs: attendance plus lab scores, no exam.
pub fn validate_standing_inputs(attendance: f64, lab_scores: &[f64]) -> Result<(), GradeError> {
    validate_inputs(lab_scores, None, attendance)
}

/// Validate record-system inputs: lab scores, prelim, attendance.
pub fn validate_final_grade_inputs(
    lab_scores: &[f64],
    prelim: f64,
    attendance: f64,
) -> Result<(), GradeError> {
    validate_inputs(lab_scores, Some(prelim), attendance)
}

/// Validate a score set. An unknown exam score is allowed here; callers
/// that need it check for it themselves.
pub fn validate_score_set(scores: &ScoreSet) -> Result<(), GradeError> {
    validate_inputs(&scores.lab_scores, scores.exam_score, scores.attendance)
}

fn validate_inputs(
    lab_scores: &[f64],
    exam: Option<f64>,
    attendance: f64,
) -> Result<(), GradeError> {
    if lab_scores.is_empty() {
        return Err(GradeError::invalid("lab scores", ""));
    }

    ensure_finite(ATTENDANCE_FIELD, attendance)?;
    for (i, &score) in lab_scores.iter().enumerate() {
        ensure_finite(&lab_field(i), score)?;
    }
    if let Some(exam) = exam {
        ensure_finite(EXAM_FIELD, exam)?;
    }

    if attendance < 0.0 {
        return Err(GradeError::NegativeAttendance(attendance));
    }

    for (i, &score) in lab_scores.iter().enumerate() {
        ensure_in_range(&lab_field(i), score)?;
    }
    if let Some(exam) = exam {
        ensure_in_range(EXAM_FIELD, exam)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn parse_score_accepts_numbers() {
        assert_eq!(parse_score("lab work 1", "69").unwrap(), 69.0);
        assert_eq!(parse_score("lab work 1", " 87.5 ").unwrap(), 87.5);
    }

    #[test]
    fn parse_score_rejects_text_and_non_finite() {
        for bad in ["", "   ", "abc", "12abc", "NaN", "inf"] {
            let err = parse_score("attendance", bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "input {bad:?}");
        }
    }

    #[test]
    fn parse_lab_scores_names_the_bad_cell() {
        assert_eq!(parse_lab_scores("69,5,52").unwrap(), vec![69.0, 5.0, 52.0]);
        let err = parse_lab_scores("69,x,52").unwrap_err();
        assert_eq!(
            err,
            GradeError::InvalidInput {
                field: "lab work 2".into(),
                value: "x".into()
            }
        );
        assert!(parse_lab_scores("").is_err());
    }

    #[test]
    fn invalid_input_is_reported_before_range_checks() {
        let err = validate_standing_inputs(-5.0, &[f64::NAN, 50.0, 50.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn negative_attendance_is_reported_before_lab_range() {
        let err = validate_standing_inputs(-1.0, &[150.0, 50.0, 50.0]).unwrap_err();
        assert_eq!(err, GradeError::NegativeAttendance(-1.0));
    }

    #[test]
    fn out_of_range_lab_names_the_lab() {
        let err = validate_standing_inputs(10.0, &[50.0, 50.0, 100.5]).unwrap_err();
        assert_eq!(
            err,
            GradeError::OutOfRangeGrade {
                field: "lab work 3".into(),
                value: 100.5
            }
        );
    }

    #[test]
    fn prelim_range_is_checked() {
        let err = validate_final_grade_inputs(&[50.0], -0.5, 10.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRangeGrade);
        assert!(validate_final_grade_inputs(&[0.0, 100.0], 100.0, 0.0).is_ok());
    }

    #[test]
    fn empty_labs_are_invalid() {
        let err = validate_final_grade_inputs(&[], 50.0, 10.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn attendance_has_no_upper_bound() {
        assert!(validate_standing_inputs(250.0, &[80.0, 80.0, 80.0]).is_ok());
    }

    #[test]
    fn score_set_without_exam_is_valid() {
        let scores = ScoreSet::new(vec![10.0, 20.0, 30.0], None, 5.0);
        assert!(validate_score_set(&scores).is_ok());
    }
}
