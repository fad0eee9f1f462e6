//! Text rendering of grade results and JSON roster reports.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Evaluation, FinalGrade, RequiredExam, Target};
use crate::roster::StudentGrade;
use crate::statistics::{summarize, RosterSummary};

const BANNER: &str = "═══════════════════════════════════════════════════════";
const RULE: &str = "───────────────────────────────────────────────────────";

/// Render a required-exam result as the calculator's multi-line report.
/// Numbers are shown with two decimals.
pub fn render_required_exam(result: &RequiredExam) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "           PRELIM GRADE CALCULATION RESULTS");
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out);

    section(&mut out, "INPUT DATA:");
    let _ = writeln!(out, "{:<28}{:.2}", "Attendance Score:", result.attendance);
    for (i, score) in result.lab_scores.iter().enumerate() {
        let label = format!("Lab Work {} Grade:", i + 1);
        let _ = writeln!(out, "{label:<28}{score:.2}");
    }
    let _ = writeln!(out);

    section(&mut out, "COMPUTED VALUES:");
    let _ = writeln!(out, "{:<28}{:.2}", "Lab Work Average:", result.lab_work_average);
    let _ = writeln!(out, "{:<28}{:.2}", "Class Standing (70%):", result.class_standing);
    let _ = writeln!(out);

    section(&mut out, "REQUIRED PRELIM EXAM SCORES:");
    let pass_label = format!("To Pass ({}):", result.passing_target);
    let excellent_label = format!("For Excellent ({}):", result.excellent_target);
    let _ = writeln!(out, "{pass_label:<28}{:.2}", result.required_for_passing);
    let _ = writeln!(out, "{excellent_label:<28}{:.2}", result.required_for_excellent);
    let _ = writeln!(out);

    section(&mut out, "EVALUATION:");
    out.push_str(&render_evaluation(result));
    let _ = writeln!(out);
    out.push_str(BANNER);
    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{RULE}");
}

/// Evaluation paragraphs for both targets, passing first.
pub fn render_evaluation(result: &RequiredExam) -> String {
    [Target::Passing, Target::Excellent]
        .iter()
        .map(|&target| {
            evaluation_paragraph(target, result.target_grade(target), result.evaluation(target))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One paragraph describing a single target's evaluation. `goal` is the
/// grade the target aims for.
pub fn evaluation_paragraph(target: Target, goal: f64, evaluation: Evaluation) -> String {
    match (target, evaluation) {
        (Target::Passing, Evaluation::Impossible) => format!(
            "\
⚠ Unfortunately, it is mathematically IMPOSSIBLE to
  pass the Prelim period, even with a perfect score
  of 100 on the Prelim Exam. Your Class Standing is
  too low to achieve a passing grade of {goal}.
"
        ),
        (Target::Passing, Evaluation::AlreadyAchieved) => "\
★ Congratulations! You have already PASSED the Prelim
  period based on your Class Standing alone!
  Any score on the Prelim Exam will keep you passing.
"
        .to_string(),
        (Target::Passing, Evaluation::Achievable(required)) => format!(
            "• You need a Prelim Exam score of {required:.2} to pass.\n  \
             This is achievable with proper preparation.\n"
        ),
        (Target::Excellent, Evaluation::Impossible) => format!(
            "\
⚠ Achieving an Excellent grade ({goal}) is not possible,
  as it would require a Prelim Exam score above 100.
"
        ),
        (Target::Excellent, Evaluation::AlreadyAchieved) => format!(
            "\
★ You have already achieved EXCELLENT standing!
  Your Class Standing guarantees a grade of {goal}.
"
        ),
        (Target::Excellent, Evaluation::Achievable(required)) => format!(
            "• You need a Prelim Exam score of {required:.2} for excellent.\n  \
             Aim high and give your best effort!\n"
        ),
    }
}

/// Render a record-system final grade on one line.
pub fn render_final_grade(grade: &FinalGrade) -> String {
    format!(
        "Lab average: {:.2}\nWeighted grade: {:.2}\nFinal grade: {} ({})",
        grade.lab_average, grade.weighted_grade, grade.final_grade, grade.status
    )
}

/// A graded roster with its summary, for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterReport {
    /// When the report was created.
    pub generated_at: DateTime<Utc>,
    pub summary: RosterSummary,
    pub rows: Vec<StudentGrade>,
}

impl RosterReport {
    pub fn new(rows: Vec<StudentGrade>) -> Self {
        Self {
            generated_at: Utc::now(),
            summary: summarize(&rows),
            rows,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: RosterReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
