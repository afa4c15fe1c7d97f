//! End-to-end CLI tests.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn studio(store: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("sql-studio").expect("binary");
    cmd.arg("--store-path").arg(store);
    cmd
}

#[test]
fn test_run_select_against_seeded_store() {
    let temp = TempDir::new().expect("temp dir");
    let store = temp.path().join("store.db");

    studio(&store)
        .args(["run", "SELECT name FROM departments ORDER BY id;"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Engineering"))
        .stdout(predicate::str::contains("(3 rows)"));
}

#[test]
fn test_schema_sql_lists_seed_tables() {
    let temp = TempDir::new().expect("temp dir");
    let store = temp.path().join("store.db");

    studio(&store)
        .args(["schema", "--sql"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE TABLE employees"))
        .stdout(predicate::str::contains("CREATE TABLE departments"));
}

#[test]
fn test_mutation_survives_process_restart() {
    let temp = TempDir::new().expect("temp dir");
    let store = temp.path().join("store.db");

    studio(&store)
        .args(["run", "CREATE TABLE notes (id INT, body TEXT);"])
        .assert()
        .success();

    studio(&store)
        .args(["schema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes"));
}

#[test]
fn test_bad_sql_reports_engine_message() {
    let temp = TempDir::new().expect("temp dir");
    let store = temp.path().join("store.db");

    studio(&store)
        .args(["run", "SELEKT bad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error:"));
}

#[test]
fn test_reset_requires_confirmation() {
    let temp = TempDir::new().expect("temp dir");
    let store = temp.path().join("store.db");

    studio(&store).arg("reset").assert().failure();

    studio(&store)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));
}
