//! The `gradebook grade` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::report::render_final_grade;
use gradebook_core::validation::{parse_lab_scores, parse_score, ATTENDANCE_FIELD, EXAM_FIELD};

pub fn execute(
    config_path: Option<PathBuf>,
    labs: String,
    prelim: String,
    attendance: String,
    format: String,
) -> Result<()> {
    let lab_scores = parse_lab_scores(&labs)?;
    let prelim = parse_score(EXAM_FIELD, &prelim)?;
    let attendance = parse_score(ATTENDANCE_FIELD, &attendance)?;

    let engine = super::load_engine(config_path)?;
    let grade = engine.compute_final_grade(&lab_scores, prelim, attendance)?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&grade)?),
        _ => println!("{}", render_final_grade(&grade)),
    }

    Ok(())
}
