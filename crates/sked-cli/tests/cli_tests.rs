//! Black-box tests for the `sked` binary, exercising command paths, error
//! handling and output formatting against a temporary database.

use predicates::prelude::*;

mod helpers;
use helpers::CliTestHarness;

#[test]
fn help_and_version() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["--help"])
        .stdout(predicate::str::contains("task scheduler"));

    harness
        .run_success(&["--version"])
        .stdout(predicate::str::contains("sked"));

    harness.run_failure(&["not-a-command"]);
}

#[test]
fn add_and_list_round_trip() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&[
            "add",
            "Yearly checkup",
            "--date",
            "29990601",
            "--repeat",
            "y",
            "--comment",
            "book ahead",
        ])
        .stdout(predicate::str::contains("Created task"))
        .stdout(predicate::str::contains("29990601"));

    harness
        .run_success(&["list"])
        .stdout(predicate::str::contains("Yearly checkup"))
        .stdout(predicate::str::contains("29990601"))
        .stdout(predicate::str::contains("book ahead"));

    harness
        .run_success(&["list", "--json"])
        .stdout(predicate::str::contains("\"date\": \"29990601\""))
        .stdout(predicate::str::contains("\"repeat\": \"y\""));
}

#[test]
fn add_rejects_bad_input() {
    let harness = CliTestHarness::new();

    harness
        .run_failure(&["add", "Task", "--date", "not-a-date"])
        .stderr(predicate::str::contains("Invalid date"));

    harness
        .run_failure(&["add", "Task", "--repeat", "d:400"])
        .stderr(predicate::str::contains("out of range"));

    harness
        .run_failure(&["add", "Task", "--repeat", "w:2"])
        .stderr(predicate::str::contains("unsupported"));

    harness
        .run_failure(&["add", ""])
        .stderr(predicate::str::contains("title"));
}

#[test]
fn done_removes_a_one_off() {
    let harness = CliTestHarness::new();

    harness.run_success(&["add", "One-off", "--date", "29990101"]);

    harness
        .run_success(&["done", "1"])
        .stdout(predicate::str::contains("removed"));

    harness
        .run_success(&["list"])
        .stdout(predicate::str::contains("No tasks scheduled."));

    // Completing again reports the task as gone.
    harness
        .run_failure(&["done", "1"])
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn done_reschedules_a_recurring_task() {
    let harness = CliTestHarness::new();

    harness.run_success(&["add", "Weekly", "--date", "29990101", "--repeat", "d:7"]);

    harness
        .run_success(&["done", "1"])
        .stdout(predicate::str::contains("next due 29990108"));

    harness
        .run_success(&["list"])
        .stdout(predicate::str::contains("Weekly"))
        .stdout(predicate::str::contains("29990108"));
}

#[test]
fn edit_updates_fields() {
    let harness = CliTestHarness::new();

    harness.run_success(&["add", "Draft", "--date", "29990101"]);

    harness
        .run_success(&["edit", "1", "--title", "Final", "--repeat", "d:30"])
        .stdout(predicate::str::contains("Updated task 1"));

    harness
        .run_success(&["list"])
        .stdout(predicate::str::contains("Final"))
        .stdout(predicate::str::contains("d:30"));

    harness
        .run_success(&["edit", "1", "--repeat-clear"])
        .stdout(predicate::str::contains("Updated task 1"));

    harness
        .run_failure(&["edit", "99", "--title", "Ghost"])
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn delete_with_force_skips_confirmation() {
    let harness = CliTestHarness::new();

    harness.run_success(&["add", "Disposable", "--date", "29990101"]);

    harness
        .run_success(&["delete", "1", "--force"])
        .stdout(predicate::str::contains("Deleted task 1"));

    harness
        .run_failure(&["delete", "1", "--force"])
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn next_previews_the_engine() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&[
            "next", "--date", "20240301", "--repeat", "d:7", "--from", "20240315",
        ])
        .stdout(predicate::str::contains("20240322"));

    harness
        .run_success(&[
            "next", "--date", "20230301", "--repeat", "y", "--from", "20250101",
        ])
        .stdout(predicate::str::contains("20250301"));

    harness
        .run_failure(&[
            "next", "--date", "20240301", "--repeat", "d:400", "--from", "20240315",
        ])
        .stderr(predicate::str::contains("out of range"));
}
