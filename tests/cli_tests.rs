use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn jobcost(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("jobcost").unwrap();
    cmd.env("JOBCOST_DATA_DIR", data_dir.path());
    cmd
}

const REFERENCE_JOB: [&str; 14] = [
    "--project-number",
    "P-1042",
    "--job-date",
    "2025-06-02",
    "--hw-base-cost",
    "1000",
    "--hw-deducts",
    "100",
    "--hw-adds",
    "50",
    "--wd-base-cost",
    "500",
    "--labor-adds",
    "75",
];

#[test]
fn test_summary_prints_table() {
    let temp_dir = TempDir::new().unwrap();

    jobcost(&temp_dir)
        .arg("summary")
        .args(REFERENCE_JOB)
        .assert()
        .success()
        .stdout(predicate::str::contains("Project #:   P-1042"))
        .stdout(predicate::str::contains("$950.00"))
        .stdout(predicate::str::contains("$1740.00"))
        .stdout(predicate::str::contains("$1815.00"));
}

#[test]
fn test_summary_negative_totals() {
    let temp_dir = TempDir::new().unwrap();

    jobcost(&temp_dir)
        .args(["summary", "--hw-base-cost", "100", "--hw-deducts", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-$400.00"))
        .stdout(predicate::str::contains("-$480.00"));
}

#[test]
fn test_margin_out_of_range_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    jobcost(&temp_dir)
        .args(["summary", "--margin-percent", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("between 0 and 100"));
}

#[test]
fn test_non_numeric_amount_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    jobcost(&temp_dir)
        .args(["summary", "--hw-adds", "lots"])
        .assert()
        .failure();
}

#[test]
fn test_non_finite_amount_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    jobcost(&temp_dir)
        .args(["summary", "--hw-base-cost", "nan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a number"));

    jobcost(&temp_dir)
        .args(["summary", "--wd-adds", "inf"])
        .assert()
        .failure();

    jobcost(&temp_dir)
        .args(["summary", "--margin-percent", "NaN"])
        .assert()
        .failure();
}

#[test]
fn test_bad_date_format_in_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    jobcost(&temp_dir)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("date_format"));
}

#[test]
fn test_export_project_number_with_slash() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("out");

    jobcost(&temp_dir)
        .args(["export", "--project-number", "2024/17", "--output"])
        .arg(&out_dir)
        .assert()
        .success();

    assert!(out_dir.join("Cost_Summary_2024-17.xlsx").exists());
}

#[test]
fn test_export_writes_xlsx_and_logs() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("out");

    jobcost(&temp_dir)
        .arg("export")
        .args(REFERENCE_JOB)
        .arg("--output")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost_Summary_P-1042.xlsx"));

    let bytes = fs::read(out_dir.join("Cost_Summary_P-1042.xlsx")).unwrap();
    assert!(bytes.starts_with(b"PK"));

    jobcost(&temp_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost_Summary_P-1042.xlsx total=$1815.00"));
}

#[test]
fn test_export_without_project_number() {
    let temp_dir = TempDir::new().unwrap();

    jobcost(&temp_dir)
        .args(["export", "--format", "json", "--output"])
        .arg(temp_dir.path())
        .assert()
        .success();

    let json = fs::read_to_string(temp_dir.path().join("Cost_Summary_.json")).unwrap();
    assert!(json.contains("\"Final Total\""));
}

#[test]
fn test_history_empty() {
    let temp_dir = TempDir::new().unwrap();

    jobcost(&temp_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No exports recorded yet."));
}

#[test]
fn test_wizard_from_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("wizard");
    let answers = [
        "2025-06-02", "W-1", "Riverside Clinic", "Hale Builders", "J. Ortiz", "100", "50", "",
        "", "75", "1000", "500", "", "yes",
    ]
    .join("\n")
        + "\n";

    jobcost(&temp_dir)
        .arg("wizard")
        .arg("--output")
        .arg(&out_dir)
        .write_stdin(answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("$1815.00"))
        .stdout(predicate::str::contains("Excel file saved to:"));

    assert!(out_dir.join("Cost_Summary_W-1.xlsx").exists());
}

#[test]
fn test_config_shows_paths() {
    let temp_dir = TempDir::new().unwrap();

    jobcost(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default markup:  20%"));
}
