//! The `gradebook roster`, `add`, `delete`, and `update` commands.

use std::path::{Path, PathBuf};

use anyhow::Result;
use comfy_table::{Cell, Color, Table};

use gradebook_core::parser::{
    embedded_dataset, parse_dataset, to_dataset_string, write_dataset, Dataset,
};
use gradebook_core::report::RosterReport;
use gradebook_core::validation::{parse_lab_scores, parse_score, ATTENDANCE_FIELD, EXAM_FIELD};
use gradebook_core::model::LAB_COUNT;
use gradebook_core::{ScoreSet, Status, StudentGrade};

pub fn show(
    config_path: Option<PathBuf>,
    dataset_path: Option<PathBuf>,
    format: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let dataset = match &dataset_path {
        Some(path) => parse_dataset(path)?,
        None => embedded_dataset()?,
    };
    report_skipped(&dataset);

    let engine = super::load_engine(config_path)?;
    let rows = dataset.roster.evaluate(&engine)?;
    let report = RosterReport::new(rows);

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "csv" => print!("{}", to_dataset_string(&dataset.roster)),
        _ => print_table(&report),
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        eprintln!("Report written to {}", path.display());
    }

    Ok(())
}

pub fn add(dataset_path: PathBuf, id: String, first_name: String, last_name: String) -> Result<()> {
    let mut dataset = load_for_edit(&dataset_path)?;
    let student = dataset
        .roster
        .add_student(&id, &first_name, &last_name)?
        .clone();

    write_dataset(&dataset_path, &dataset.roster)?;
    println!("Added {} ({})", student.student_id, student.full_name());
    Ok(())
}

pub fn delete(dataset_path: PathBuf, id: String) -> Result<()> {
    let mut dataset = load_for_edit(&dataset_path)?;
    let removed = dataset.roster.remove_student(&id)?;

    write_dataset(&dataset_path, &dataset.roster)?;
    println!("Deleted {} ({})", removed.student_id, removed.full_name());
    Ok(())
}

pub fn update(
    config_path: Option<PathBuf>,
    dataset_path: PathBuf,
    id: String,
    labs: String,
    prelim: String,
    attendance: String,
) -> Result<()> {
    let lab_scores = parse_lab_scores(&labs)?;
    let prelim = parse_score(EXAM_FIELD, &prelim)?;
    let attendance = parse_score(ATTENDANCE_FIELD, &attendance)?;

    let engine = super::load_engine(config_path)?;
    let mut dataset = load_for_edit(&dataset_path)?;
    let student = dataset
        .roster
        .update_scores(&id, ScoreSet::new(lab_scores, Some(prelim), attendance))?
        .clone();
    let grade = engine.final_grade(&student.scores)?;

    write_dataset(&dataset_path, &dataset.roster)?;
    println!(
        "Updated {} ({}): final grade {} ({})",
        student.student_id,
        student.full_name(),
        grade.final_grade,
        grade.status
    );
    Ok(())
}

fn load_for_edit(path: &Path) -> Result<Dataset> {
    let dataset = parse_dataset(path)?;
    if !dataset.skipped.is_empty() {
        eprintln!(
            "warning: {} malformed row(s) in {} will not be written back",
            dataset.skipped.len(),
            path.display()
        );
    }
    Ok(dataset)
}

fn report_skipped(dataset: &Dataset) {
    for row in &dataset.skipped {
        eprintln!("  WARNING: skipped line {}: {}", row.line, row.reason);
    }
}

fn print_table(report: &RosterReport) {
    let mut table = Table::new();
    let mut header: Vec<String> = ["Student ID", "First Name", "Last Name"]
        .map(String::from)
        .to_vec();
    header.extend((1..=LAB_COUNT).map(|i| format!("Lab {i}")));
    header.extend(["Prelim", "Attendance", "Final Grade", "Pass/Fail"].map(String::from));
    table.set_header(header);

    for row in &report.rows {
        table.add_row(table_row(row));
    }

    println!("{table}");

    let summary = &report.summary;
    println!(
        "{} students: {} passed, {} failed ({:.1}% pass rate), mean final grade {:.2}",
        summary.students,
        summary.passed,
        summary.failed,
        summary.pass_rate * 100.0,
        summary.mean_final_grade
    );
}

fn table_row(row: &StudentGrade) -> Vec<Cell> {
    let student = &row.student;
    let scores = &student.scores;

    let mut cells = vec![
        Cell::new(&student.student_id),
        Cell::new(&student.first_name),
        Cell::new(&student.last_name),
    ];
    cells.extend(scores.lab_scores.iter().map(Cell::new));
    cells.push(Cell::new(
        scores
            .exam_score
            .map(|s| s.to_string())
            .unwrap_or_default(),
    ));
    cells.push(Cell::new(scores.attendance));
    cells.push(Cell::new(row.grade.final_grade));

    let color = match row.grade.status {
        Status::Pass => Color::Green,
        Status::Fail => Color::Red,
    };
    cells.push(Cell::new(row.grade.status).fg(color));
    cells
}
