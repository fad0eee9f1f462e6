//! The `gradebook validate` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::parser::{parse_dataset, validate_roster};

pub fn execute(dataset_path: PathBuf) -> Result<()> {
    let dataset = parse_dataset(&dataset_path)?;

    println!(
        "Dataset: {} ({} students)",
        dataset_path.display(),
        dataset.roster.len()
    );

    for row in &dataset.skipped {
        println!("  [line {}] WARNING: skipped row, {}", row.line, row.reason);
    }

    let warnings = validate_roster(&dataset.roster);
    for w in &warnings {
        let prefix = w
            .student_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    let total_warnings = warnings.len() + dataset.skipped.len();
    if total_warnings == 0 {
        println!("Dataset valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
