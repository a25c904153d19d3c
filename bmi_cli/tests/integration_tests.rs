//! Integration tests for the bmi_cli binary.
//!
//! These tests verify end-to-end behavior including:
//! - One-shot compute output (text and JSON)
//! - Input clamping at the presentation boundary
//! - The interactive session workflow (save, export, reset)

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a test export directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bmical"))
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive BMI calculator with session history",
        ));
}

#[test]
fn test_compute_metric() {
    cli()
        .args(["compute", "--height", "170", "--weight", "70"])
        .assert()
        .success()
        .stdout(predicate::str::contains("24.22"))
        .stdout(predicate::str::contains("Normal"));
}

#[test]
fn test_compute_imperial() {
    cli()
        .args([
            "compute",
            "--units",
            "imperial",
            "--height",
            "67",
            "--weight",
            "150",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("23.49"))
        .stdout(predicate::str::contains("Normal"));
}

#[test]
fn test_compute_renders_advice_and_plan() {
    cli()
        .args(["compute", "--height", "170", "--weight", "70"])
        .assert()
        .success()
        .stdout(predicate::str::contains("balanced diet"))
        .stdout(predicate::str::contains("Breakfast"))
        .stdout(predicate::str::contains("Tip"));
}

#[test]
fn test_compute_json_output() {
    let output = cli()
        .args(["compute", "--height", "170", "--weight", "70", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value =
        serde_json::from_slice(&output).expect("JSON output should parse");
    assert_eq!(parsed["value"], 24.22);
    assert_eq!(parsed["category"], "normal");
    assert_eq!(parsed["tone"], "success");
    assert!(parsed["plan"]["breakfast"].is_string());
}

#[test]
fn test_compute_clamps_out_of_range_input() {
    // Height 10 cm is below the 40 cm floor and gets clamped
    cli()
        .args(["compute", "--height", "10", "--weight", "70"])
        .assert()
        .success()
        .stderr(predicate::str::contains("clamping"));
}

#[test]
fn test_unknown_units_falls_back_to_default() {
    cli()
        .args([
            "compute",
            "--units",
            "cubits",
            "--height",
            "170",
            "--weight",
            "70",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown unit system"))
        .stdout(predicate::str::contains("24.22"));
}

#[test]
fn test_session_save_and_export() {
    let temp_dir = setup_test_dir();
    let export_dir = temp_dir.path().to_path_buf();

    cli()
        .arg("session")
        .arg("--export-dir")
        .arg(&export_dir)
        .write_stdin("170\n70\ns\ne\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved reading"))
        .stdout(predicate::str::contains("Exported 1 entries"));

    let csv_path = export_dir.join("bmi_history.csv");
    let contents = fs::read_to_string(&csv_path).expect("Failed to read export");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "Time,BMI,Category");
    assert_eq!(lines.len(), 2);
    assert!(lines[1].ends_with(",24.22,Normal"));
}

#[test]
fn test_session_export_preserves_insertion_order() {
    let temp_dir = setup_test_dir();
    let export_dir = temp_dir.path().to_path_buf();

    // Save a normal reading, then an overweight one, then export
    cli()
        .arg("session")
        .arg("--export-dir")
        .arg(&export_dir)
        .write_stdin("170\n70\ns\n\n180\n90\ns\ne\nq\n")
        .assert()
        .success();

    let contents = fs::read_to_string(export_dir.join("bmi_history.csv")).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains(",24.22,"));
    assert!(lines[2].contains(",27.78,"));
}

#[test]
fn test_session_history_listing_is_newest_first() {
    let output = cli()
        .arg("session")
        .write_stdin("170\n70\ns\n\n180\n90\ns\nh\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recent readings"))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let listing = &stdout[stdout.find("Recent readings").unwrap()..];
    let newer = listing.find("27.78").expect("second reading listed");
    let older = listing.find("24.22").expect("first reading listed");
    assert!(newer < older, "history should list the newest reading first");
}

#[test]
fn test_session_reset_empties_history() {
    cli()
        .arg("session")
        .write_stdin("170\n70\ns\nr\nh\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("History cleared"))
        .stdout(predicate::str::contains("History is empty."));
}

#[test]
fn test_session_ends_cleanly_on_eof() {
    cli()
        .arg("session")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye"));
}
