use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn add(dir: &TempDir, amount: &str, category: &str, date: &str) {
    expenses(dir)
        .args(["add", amount, "-c", category, "-d", date])
        .assert()
        .success();
}

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "42.50", "-c", "Food", "-d", "2024-01-15", "-m", "Lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense #1"));

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("$42.50"));

    assert!(dir.path().join("data/expenses.db").exists());
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn empty_list() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn totals_by_month_and_overall() {
    let dir = TempDir::new().unwrap();
    add(&dir, "10.00", "Food", "2024-01-15");
    add(&dir, "5.25", "Transport", "2024-01-20");
    add(&dir, "100", "Bills", "2024-02-01");

    expenses(&dir)
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $115.25"));

    expenses(&dir)
        .args(["total", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total for 2024-01: $15.25"));

    expenses(&dir)
        .args(["summary", "--top", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bills"));
}

#[test]
fn invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "lots", "-c", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    expenses(&dir)
        .args(["add", "0", "-c", "Food"])
        .assert()
        .failure();

    expenses(&dir)
        .args(["add", "999999999999999999", "-c", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    expenses(&dir)
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $0.00"));
}

#[test]
fn delete_requires_force() {
    let dir = TempDir::new().unwrap();
    add(&dir, "8.00", "Food", "2024-03-01");

    expenses(&dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force"));

    expenses(&dir)
        .args(["show", "1"])
        .assert()
        .success();

    expenses(&dir)
        .args(["delete", "1", "--force"])
        .assert()
        .success();

    expenses(&dir)
        .args(["show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn edit_changes_only_given_fields() {
    let dir = TempDir::new().unwrap();
    add(&dir, "8.00", "Food", "2024-03-01");

    expenses(&dir)
        .args(["edit", "1", "--amount", "9.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$9.50"))
        .stdout(predicate::str::contains("Food"));

    expenses(&dir)
        .args(["edit", "42", "--amount", "1"])
        .assert()
        .failure();
}

#[test]
fn export_csv() {
    let dir = TempDir::new().unwrap();
    add(&dir, "3.50", "Food", "2024-03-01");
    let output = dir.path().join("out.csv");

    expenses(&dir)
        .arg("export")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses"));

    let contents = std::fs::read_to_string(output).unwrap();
    assert!(contents.contains("1,2024-03-01,Food,3.50,"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses.db"))
        .stdout(predicate::str::contains("Default category: Food"));
}
