//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run the binary from an empty directory so no local gradebook.toml is picked up.
fn gradebook(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("GRADEBOOK_PASS_THRESHOLD")
        .env_remove("GRADEBOOK_ROUNDING")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn grade_failing_student() {
    let dir = TempDir::new().unwrap();
    gradebook(&dir)
        .args(["grade", "--labs", "69,5,52", "--prelim", "12", "--attendance", "78"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lab average: 42.00"))
        .stdout(predicate::str::contains("Final grade: 37 (FAIL)"));
}

#[test]
fn grade_passing_student_json() {
    let dir = TempDir::new().unwrap();
    let output = gradebook(&dir)
        .args([
            "grade",
            "--labs",
            "75,75,75",
            "--prelim",
            "75",
            "--attendance",
            "75",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["final_grade"], 75);
    assert_eq!(json["status"], "PASS");
}

#[test]
fn grade_non_numeric_prelim() {
    let dir = TempDir::new().unwrap();
    gradebook(&dir)
        .args(["grade", "--labs", "69,5,52", "--prelim", "abc", "--attendance", "78"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: invalid input"))
        .stderr(predicate::str::contains("prelim exam"));
}

#[test]
fn grade_out_of_range_lab() {
    let dir = TempDir::new().unwrap();
    gradebook(&dir)
        .args(["grade", "--labs", "69,105,52", "--prelim", "12", "--attendance", "78"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out-of-range grade: lab work 2"));
}

#[test]
fn required_perfect_standing() {
    let dir = TempDir::new().unwrap();
    gradebook(&dir)
        .args([
            "required",
            "--attendance",
            "100",
            "--lab1",
            "100",
            "--lab2",
            "100",
            "--lab3",
            "100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("PRELIM GRADE CALCULATION RESULTS"))
        .stdout(predicate::str::contains("To Pass (75):               16.67"))
        .stdout(predicate::str::contains("For Excellent (100):        100.00"))
        .stdout(predicate::str::contains("score of 16.67 to pass"));
}

#[test]
fn required_zero_standing_is_impossible() {
    let dir = TempDir::new().unwrap();
    let output = gradebook(&dir)
        .args([
            "required",
            "--attendance",
            "0",
            "--lab1",
            "0",
            "--lab2",
            "0",
            "--lab3",
            "0",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["required_for_passing"], 250.0);
    assert_eq!(json["passing"]["evaluation"], "IMPOSSIBLE");
    assert_eq!(json["excellent"]["evaluation"], "IMPOSSIBLE");
}

#[test]
fn required_negative_attendance() {
    let dir = TempDir::new().unwrap();
    gradebook(&dir)
        .args([
            "required",
            "--attendance",
            "-3",
            "--lab1",
            "50",
            "--lab2",
            "50",
            "--lab3",
            "50",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative attendance"));
}

#[test]
fn required_non_numeric_lab_wins_over_negative_attendance() {
    let dir = TempDir::new().unwrap();
    gradebook(&dir)
        .args([
            "required",
            "--attendance",
            "-3",
            "--lab1",
            "50",
            "--lab2",
            "fifty",
            "--lab3",
            "50",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input: lab work 2"));
}

#[test]
fn roster_embedded_table() {
    let dir = TempDir::new().unwrap();
    gradebook(&dir)
        .arg("roster")
        .assert()
        .success()
        .stdout(predicate::str::contains("Osbourne"))
        .stdout(predicate::str::contains("Pass/Fail"))
        .stdout(predicate::str::contains("Lab 3"))
        .stdout(predicate::str::contains("FAIL"))
        .stdout(predicate::str::contains(
            "20 students: 0 passed, 20 failed (0.0% pass rate), mean final grade 47.05",
        ));
}

#[test]
fn roster_embedded_csv_matches_dataset_format() {
    let dir = TempDir::new().unwrap();
    gradebook(&dir)
        .args(["roster", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "StudentID,first_name,last_name,LAB WORK 1,LAB WORK 2,LAB WORK 3,PRELIM EXAM,ATTENDANCE GRADE\n",
        ))
        .stdout(predicate::str::contains(
            "073900438,Osbourne,Wakenshaw,69,5,52,12,78\n",
        ));
}

#[test]
fn roster_writes_json_report() {
    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("out").join("report.json");

    gradebook(&dir)
        .args(["roster", "--format", "json", "--output"])
        .arg(&report_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report written to"));

    let content = std::fs::read_to_string(&report_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["summary"]["students"], 20);
    assert_eq!(json["rows"].as_array().unwrap().len(), 20);
}

#[test]
fn pass_threshold_from_env() {
    let dir = TempDir::new().unwrap();
    gradebook(&dir)
        .env("GRADEBOOK_PASS_THRESHOLD", "35")
        .args(["grade", "--labs", "69,5,52", "--prelim", "12", "--attendance", "78"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final grade: 37 (PASS)"));
}

#[test]
fn required_labels_follow_config_targets() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[calculator]\npassing_target = 60.0\n").unwrap();

    gradebook(&dir)
        .arg("--config")
        .arg(&config)
        .args([
            "required",
            "--attendance",
            "100",
            "--lab1",
            "100",
            "--lab2",
            "100",
            "--lab3",
            "100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("To Pass (60):               -33.33"))
        .stdout(predicate::str::contains("(75)").not())
        .stdout(predicate::str::contains("already PASSED"));
}

#[test]
fn rounding_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[record]\nrounding = \"half-even\"\n").unwrap();

    gradebook(&dir)
        .arg("--config")
        .arg(&config)
        .args([
            "grade",
            "--labs",
            "74.5,74.5,74.5",
            "--prelim",
            "74.5",
            "--attendance",
            "74.5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final grade: 74 (FAIL)"));
}

#[test]
fn invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("gradebook.toml"),
        "[calculator]\nexam_weight = 0.5\n",
    )
    .unwrap();

    gradebook(&dir)
        .args([
            "required",
            "--attendance",
            "10",
            "--lab1",
            "10",
            "--lab2",
            "10",
            "--lab3",
            "10",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn missing_config_file() {
    let dir = TempDir::new().unwrap();
    gradebook(&dir)
        .args(["--config", "nope.toml", "roster"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    gradebook(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created gradebook.toml"))
        .stdout(predicate::str::contains("Created students.csv"));

    assert!(dir.path().join("gradebook.toml").exists());
    assert!(dir.path().join("students.csv").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    // First init
    gradebook(&dir).arg("init").assert().success();

    // Second init should skip
    gradebook(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn validate_initialized_dataset() {
    let dir = TempDir::new().unwrap();
    gradebook(&dir).arg("init").assert().success();

    gradebook(&dir)
        .args(["validate", "--dataset", "students.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20 students"))
        .stdout(predicate::str::contains("Dataset valid."));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();
    gradebook(&dir)
        .args(["validate", "--dataset", "nonexistent.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    gradebook(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade calculator and student record editor"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    gradebook(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gradebook"));
}
