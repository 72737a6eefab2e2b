//! End-to-end tests for the spendlog binary
//!
//! Each test points SPENDLOG_DATA_DIR at a fresh temp directory so tests
//! never share a database.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendlog(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendlog").unwrap();
    cmd.env("SPENDLOG_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_then_list_shows_the_expense() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["add", "250", "Groceries", "--date", "2025-08-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded expense #1"));

    spendlog(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("$250.00"))
        .stdout(predicate::str::contains("2025-08-15"));
}

#[test]
fn list_with_no_records_reports_empty() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn list_filters_by_category() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["add", "250", "Groceries", "--date", "2025-08-15"])
        .assert()
        .success();
    spendlog(&dir)
        .args(["add", "1200", "Rent", "--date", "2025-08-01"])
        .assert()
        .success();

    spendlog(&dir)
        .args(["list", "--category", "Rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Groceries").not());

    // No matches is an empty listing, not an error
    spendlog(&dir)
        .args(["list", "--category", "Travel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["add", "abc", "Groceries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    spendlog(&dir)
        .args(["add", "-50", "Groceries"])
        .assert()
        .failure();
}

#[test]
fn summary_matches_worked_example() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["add", "250", "Groceries", "--date", "2025-08-15"])
        .assert()
        .success();
    spendlog(&dir)
        .args(["add", "1200", "Rent", "--date", "2025-08-01"])
        .assert()
        .success();

    spendlog(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-08"))
        .stdout(predicate::str::contains("$1450.00"));

    spendlog(&dir)
        .args(["summary", "--month", "2025-08"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("$250.00"))
        .stdout(predicate::str::contains("$1200.00"));
}

#[test]
fn summary_budget_override_controls_alert() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["add", "1450", "Rent", "--date", "2025-08-01"])
        .assert()
        .success();

    spendlog(&dir)
        .args(["summary", "--budget", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALERT:"));

    // Equal to the threshold does not alert
    spendlog(&dir)
        .args(["summary", "--budget", "1450"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALERT:").not());
}

#[test]
fn add_reports_alert_when_budget_exceeded() {
    let dir = TempDir::new().unwrap();

    // Default monthly budget is 5000.00
    spendlog(&dir)
        .args(["add", "4000", "Rent", "--date", "2025-08-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALERT:").not());

    spendlog(&dir)
        .args(["add", "2000", "Travel", "--date", "2025-08-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALERT:"));
}

#[test]
fn csv_export_then_import_round_trips() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("out.csv");

    spendlog(&dir)
        .args(["add", "250", "Groceries", "--date", "2025-08-15", "-m", "weekly shop"])
        .assert()
        .success();
    spendlog(&dir)
        .args(["add", "1200", "Rent", "--date", "2025-08-01"])
        .assert()
        .success();

    spendlog(&dir)
        .args(["export", "csv", "--output"])
        .arg(&csv_path)
        .assert()
        .success();

    let csv_text = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv_text.lines().count(), 3); // header + 2 rows

    let second = TempDir::new().unwrap();
    spendlog(&second)
        .arg("import")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 expense(s)"));

    spendlog(&second)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("weekly shop"))
        .stdout(predicate::str::contains("$1200.00"));
}

#[test]
fn chart_command_writes_png() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("pie.png");

    spendlog(&dir)
        .args(["add", "250", "Groceries", "--date", "2025-08-15"])
        .assert()
        .success();

    spendlog(&dir)
        .args(["chart", "pie", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Chart saved to"));

    assert!(out.exists());
}

#[test]
fn export_with_no_records_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("out.csv");

    spendlog(&dir)
        .args(["export", "csv", "--output"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses to export."));

    assert!(!csv_path.exists());
}

#[test]
fn config_shows_paths_and_settings() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses.db"))
        .stdout(predicate::str::contains("Monthly budget: $5000.00"));
}
