//! The grade engine.
//!
//! Pure and stateless apart from its configuration: every call validates its
//! inputs, computes, and returns a fresh result value.

use crate::config::GradebookConfig;
use crate::error::GradeError;
use crate::model::{Evaluation, FinalGrade, RequiredExam, ScoreSet, Status, Target};
use crate::validation::{
    validate_final_grade_inputs, validate_standing_inputs, EXAM_FIELD,
};

/// Computes final grades and required exam scores.
#[derive(Debug, Clone, Default)]
pub struct GradeEngine {
    config: GradebookConfig,
}

impl GradeEngine {
    pub fn new(config: GradebookConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GradebookConfig {
        &self.config
    }

    /// Record-system final grade from lab scores, prelim exam, and attendance.
    ///
    /// `final = round(lab_avg * 0.40 + prelim * 0.40 + attendance * 0.20)`
    /// with the default weights and rounding policy.
    pub fn compute_final_grade(
        &self,
        lab_scores: &[f64],
        prelim: f64,
        attendance: f64,
    ) -> Result<FinalGrade, GradeError> {
        validate_final_grade_inputs(lab_scores, prelim, attendance)?;

        let record = &self.config.record;
        let lab_average = mean(lab_scores);
        let weighted_grade = lab_average * record.lab_weight
            + prelim * record.prelim_weight
            + attendance * record.attendance_weight;
        let final_grade = record.rounding.apply(weighted_grade);
        let status = Status::from_grade(final_grade, record.pass_threshold);

        tracing::debug!(
            lab_average,
            weighted_grade,
            final_grade,
            %status,
            "computed final grade"
        );

        Ok(FinalGrade {
            lab_average,
            weighted_grade,
            final_grade,
            status,
        })
    }

    /// Final grade from a score set. The exam score must be known.
    pub fn final_grade(&self, scores: &ScoreSet) -> Result<FinalGrade, GradeError> {
        let prelim = scores
            .exam_score
            .ok_or_else(|| GradeError::invalid(EXAM_FIELD, ""))?;
        self.compute_final_grade(&scores.lab_scores, prelim, scores.attendance)
    }

    /// Calculator mode: the exam score needed to reach the passing and
    /// excellent targets given attendance and lab work.
    pub fn compute_required_exam(
        &self,
        attendance: f64,
        lab_scores: &[f64],
    ) -> Result<RequiredExam, GradeError> {
        validate_standing_inputs(attendance, lab_scores)?;

        let calc = &self.config.calculator;
        let lab_work_average = mean(lab_scores);
        let class_standing =
            calc.attendance_weight * attendance + calc.lab_weight * lab_work_average;
        let required_for_passing = self.required_exam_for(class_standing, calc.passing_target);
        let required_for_excellent =
            self.required_exam_for(class_standing, calc.excellent_target);

        tracing::debug!(
            lab_work_average,
            class_standing,
            required_for_passing,
            required_for_excellent,
            "computed required exam scores"
        );

        Ok(RequiredExam {
            attendance,
            lab_scores: lab_scores.to_vec(),
            lab_work_average,
            class_standing,
            passing_target: calc.passing_target,
            excellent_target: calc.excellent_target,
            required_for_passing,
            required_for_excellent,
            passing: classify(required_for_passing),
            excellent: classify(required_for_excellent),
        })
    }

    /// Same as [`compute_required_exam`](Self::compute_required_exam), reading
    /// attendance and labs from a score set. Any exam score is ignored.
    pub fn required_exam(&self, scores: &ScoreSet) -> Result<RequiredExam, GradeError> {
        self.compute_required_exam(scores.attendance, &scores.lab_scores)
    }

    /// `grade = exam_weight * exam + standing_weight * class_standing`
    pub fn weighted_grade(&self, exam: f64, class_standing: f64) -> f64 {
        let calc = &self.config.calculator;
        calc.exam_weight * exam + calc.standing_weight * class_standing
    }

    /// Invert [`weighted_grade`](Self::weighted_grade) for the exam score.
    pub fn required_exam_for(&self, class_standing: f64, target: f64) -> f64 {
        let calc = &self.config.calculator;
        (target - calc.standing_weight * class_standing) / calc.exam_weight
    }

    /// The grade a target refers to under this configuration.
    pub fn target_grade(&self, target: Target) -> f64 {
        match target {
            Target::Passing => self.config.calculator.passing_target,
            Target::Excellent => self.config.calculator.excellent_target,
        }
    }
}

/// Classify a required exam score.
pub fn classify(required: f64) -> Evaluation {
    Evaluation::classify(required)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
