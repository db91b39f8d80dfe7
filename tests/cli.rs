use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn spesa(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("spesa").unwrap();
    cmd.arg("--file").arg(store);
    cmd
}

#[test]
fn add_list_and_categories() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("expenses.json");

    spesa(&store)
        .args(["add", "Coffee", "3.5", "2024-01-01", "food"])
        .assert()
        .success()
        .stdout(contains("Recorded expense 1"));
    spesa(&store)
        .args(["add", "Bus", "2", "2024-01-02", "transport"])
        .assert()
        .success()
        .stdout(contains("Recorded expense 2"));

    spesa(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Coffee").and(contains("Bus")));

    spesa(&store)
        .arg("categories")
        .assert()
        .success()
        .stdout(contains("food").and(contains("transport")));
}

#[test]
fn list_sorted_descending() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("expenses.json");

    spesa(&store)
        .args(["add", "Cheap", "1", "2024-01-01", "misc"])
        .assert()
        .success();
    spesa(&store)
        .args(["add", "Pricey", "9", "2024-01-01", "misc"])
        .assert()
        .success();

    let output = spesa(&store)
        .args(["list", "--sort", "descending"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let pricey = stdout.find("Pricey").unwrap();
    let cheap = stdout.find("Cheap").unwrap();
    assert!(pricey < cheap);
}

#[test]
fn delete_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("expenses.json");

    spesa(&store)
        .args(["add", "Coffee", "3.5", "2024-01-01", "food"])
        .assert()
        .success();

    spesa(&store)
        .args(["delete", "99"])
        .assert()
        .success()
        .stdout(contains("No expense with id 99"));
    spesa(&store)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(contains("Deleted expense 1"));

    spesa(&store)
        .args(["add", "Bus", "2", "2024-01-02", "transport"])
        .assert()
        .success();
    spesa(&store).arg("clear").assert().success();
    spesa(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No expenses recorded"));
}

#[test]
fn rejects_nonpositive_amount() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("expenses.json");

    spesa(&store)
        .args(["add", "Coffee", "0", "2024-01-01", "food"])
        .assert()
        .failure()
        .stderr(contains("positive amount"));
}

#[test]
fn corrupt_store_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("expenses.json");
    std::fs::write(&store, "definitely not json").unwrap();

    spesa(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No expenses recorded"));
}
