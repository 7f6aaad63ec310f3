mod common;
use common::cli::{bl_command, run_bl};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_help() {
    bl_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("desk"))
        .stdout(predicate::str::contains("books"))
        .stdout(predicate::str::contains("--loan-days"));
}

#[test]
fn test_version() {
    bl_command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bl"));
}

#[test]
fn test_books_lists_sample_catalog() {
    let output = run_bl(["books"], "", "books");
    assert!(output.status.success());
    assert!(output.stdout.contains("Introduction to Algorithms"));
    assert!(output.stdout.contains("4 book(s)"));
}

#[test]
fn test_books_json() {
    let output = run_bl(["books", "--json"], "", "books_json");
    assert!(output.status.success());
    let books: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(books.as_array().unwrap().len(), 4);
    assert_eq!(books[2]["title"], "Clean Code");
    assert_eq!(books[2]["total_copies"], 3);
}

#[test]
fn test_config_file_applies() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("booklend.yaml");
    fs::write(
        &path,
        "loan_period_days: 21\nfine_per_day: 2.0\nseed_sample_data: false\n",
    )
    .unwrap();

    let output = run_bl(
        ["--config", path.to_str().unwrap(), "config", "--json"],
        "",
        "config_show",
    );
    assert!(output.status.success(), "stderr: {}", output.stderr);
    let view: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(view["loan_period_days"], 21);
    assert_eq!(view["fine_per_day"], 2.0);
    assert_eq!(view["seed_sample_data"], false);
    assert!(!output.stdout.contains("admin"));

    let output = run_bl(["--config", path.to_str().unwrap(), "books"], "", "config_books");
    assert!(output.stdout.contains("No books in library."));
}

#[test]
fn test_flag_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("booklend.yaml");
    fs::write(&path, "loan_period_days: 21\n").unwrap();

    let output = run_bl(
        ["--config", path.to_str().unwrap(), "--loan-days", "3", "config"],
        "",
        "override",
    );
    assert!(output.status.success());
    assert!(output.stdout.contains("loan_period_days: 3"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.yaml");
    bl_command()
        .args(["--config", path.to_str().unwrap(), "books"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_invalid_policy_fails() {
    bl_command()
        .args(["--loan-days", "0", "books"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loan_period_days"));
}
