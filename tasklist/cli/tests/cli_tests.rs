use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

/// A `tasklist` invocation working against a task file in its own temp dir.
fn tasklist(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tasklist").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn add_task(dir: &TempDir, name: &str, category: &str, due: &str, priority: &str) {
    tasklist(dir)
        .args(["add", name, "--category", category, "--due", due, "--priority", priority])
        .assert()
        .success();
}

#[test]
fn added_task_shows_up_in_the_list() {
    let dir = TempDir::new().unwrap();

    add_task(&dir, "Buy milk", "Errands", "2024-07-09", "High");

    tasklist(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("Errands"));
}

#[test]
fn add_rejects_a_malformed_due_date() {
    let dir = TempDir::new().unwrap();

    tasklist(&dir)
        .args(["add", "Buy milk", "--category", "Errands", "--due", "next week"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));

    tasklist(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn done_moves_a_task_to_the_completed_listing() {
    let dir = TempDir::new().unwrap();
    add_task(&dir, "Buy milk", "Errands", "2024-07-09", "High");

    tasklist(&dir).args(["done", "Buy milk"]).assert().success();

    tasklist(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
    tasklist(&dir)
        .args(["list", "--completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"));
}

#[test]
fn undone_brings_a_task_back() {
    let dir = TempDir::new().unwrap();
    add_task(&dir, "Buy milk", "Errands", "2024-07-09", "High");
    tasklist(&dir).args(["done", "Buy milk"]).assert().success();

    tasklist(&dir).args(["undone", "Buy milk"]).assert().success();

    tasklist(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"));
}

#[test]
fn completing_a_missing_task_fails_with_a_message() {
    let dir = TempDir::new().unwrap();

    tasklist(&dir)
        .args(["done", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no task named 'Nope'"));
}

#[test]
fn deleting_a_missing_task_fails_with_a_message() {
    let dir = TempDir::new().unwrap();
    add_task(&dir, "Buy milk", "Errands", "2024-07-09", "High");

    tasklist(&dir)
        .args(["delete", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no task named 'Nope'"));

    // The store is untouched.
    tasklist(&dir)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("Buy milk"));
}

#[test]
fn edit_moves_a_task_between_categories() {
    let dir = TempDir::new().unwrap();
    add_task(&dir, "Write report", "Work", "2024-03-01", "High");

    tasklist(&dir)
        .args([
            "edit",
            "Write report",
            "--name",
            "Write report",
            "--category",
            "Home",
            "--due",
            "2024-03-01",
            "--priority",
            "High",
        ])
        .assert()
        .success();

    tasklist(&dir)
        .args(["list", "--category", "Home"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Write report"));
    tasklist(&dir)
        .args(["list", "--category", "Work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn month_filter_rejects_an_out_of_range_month() {
    let dir = TempDir::new().unwrap();

    tasklist(&dir)
        .args(["list", "--month", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("month must be between 1 and 12"));
}

#[test]
fn month_filter_keeps_only_tasks_due_that_month() {
    let dir = TempDir::new().unwrap();
    add_task(&dir, "March errand", "Errands", "2024-03-01", "Low");
    add_task(&dir, "July errand", "Errands", "2024-07-15", "High");

    tasklist(&dir)
        .args(["list", "--month", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("July errand"))
        .stdout(predicate::str::contains("March errand").not());
}

#[test]
fn sorted_listing_puts_the_earliest_due_date_first() {
    let dir = TempDir::new().unwrap();
    add_task(&dir, "Later", "Work", "2024-03-01", "Low");
    add_task(&dir, "Sooner", "Work", "2024-01-15", "Medium");

    let output = tasklist(&dir)
        .args(["list", "--sort"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let sooner = stdout.find("Sooner").unwrap();
    let later = stdout.find("Later").unwrap();
    assert!(sooner < later);
}

#[test]
fn category_filter_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    add_task(&dir, "Write report", "Work", "2024-03-01", "High");

    tasklist(&dir)
        .args(["list", "--category", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Write report"));
}

#[test]
fn clear_deletes_every_task() {
    let dir = TempDir::new().unwrap();
    add_task(&dir, "Write report", "Work", "2024-03-01", "High");
    add_task(&dir, "Mow lawn", "Home", "2024-03-10", "Medium");

    tasklist(&dir).arg("clear").assert().success();

    tasklist(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn tasks_persist_across_invocations() {
    let dir = TempDir::new().unwrap();
    add_task(&dir, "Buy milk", "Errands", "2024-07-09", "High");

    // A separate process reads the same file back.
    tasklist(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"));
    assert!(dir.path().join("tasks.json").exists());
}

#[test]
fn corrupt_task_file_degrades_to_an_empty_store() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("tasks.json"), "{ not json").unwrap();

    tasklist(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}
