//! The `gradebook init` command.

use anyhow::Result;

use gradebook_core::parser::embedded_dataset_str;

pub fn execute() -> Result<()> {
    // Create gradebook.toml
    if std::path::Path::new("gradebook.toml").exists() {
        println!("gradebook.toml already exists, skipping.");
    } else {
        std::fs::write("gradebook.toml", SAMPLE_CONFIG)?;
        println!("Created gradebook.toml");
    }

    // Create starter dataset
    let dataset_path = std::path::Path::new("students.csv");
    if dataset_path.exists() {
        println!("students.csv already exists, skipping.");
    } else {
        std::fs::write(dataset_path, embedded_dataset_str())?;
        println!("Created students.csv");
    }

    println!("\nNext steps:");
    println!("  1. Edit gradebook.toml to adjust weights or the pass threshold");
    println!("  2. Run: gradebook validate --dataset students.csv");
    println!("  3. Run: gradebook roster --dataset students.csv");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

[record]
# final = round(lab_average * lab_weight + prelim * prelim_weight + attendance * attendance_weight)
lab_weight = 0.40
prelim_weight = 0.40
attendance_weight = 0.20
pass_threshold = 75
# "half-up" or "half-even"
rounding = "half-up"

[calculator]
# class_standing = attendance * attendance_weight + lab_average * lab_weight
attendance_weight = 0.40
lab_weight = 0.60
# grade = exam * exam_weight + class_standing * standing_weight
exam_weight = 0.30
standing_weight = 0.70
passing_target = 75.0
excellent_target = 100.0
"#;
