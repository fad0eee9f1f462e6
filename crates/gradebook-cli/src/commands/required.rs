//! The `gradebook required` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::report::render_required_exam;
use gradebook_core::validation::{lab_field, parse_score, ATTENDANCE_FIELD};

pub fn execute(
    config_path: Option<PathBuf>,
    attendance: String,
    labs: [String; 3],
    format: String,
) -> Result<()> {
    // Every field must be numeric before any range check runs.
    let attendance = parse_score(ATTENDANCE_FIELD, &attendance)?;
    let lab_scores = labs
        .iter()
        .enumerate()
        .map(|(i, text)| parse_score(&lab_field(i), text))
        .collect::<Result<Vec<_>, _>>()?;

    let engine = super::load_engine(config_path)?;
    let result = engine.compute_required_exam(attendance, &lab_scores)?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => println!("{}", render_required_exam(&result)),
    }

    Ok(())
}
