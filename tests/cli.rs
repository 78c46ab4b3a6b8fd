//! End-to-end tests for the `summary` subcommand

use assert_cmd::Command;
use predicates::prelude::*;

fn outlay() -> Command {
    Command::cargo_bin("outlay").expect("binary builds")
}

#[test]
fn summary_prints_the_demo_dashboard() {
    outlay()
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("$1481.76"))
        .stdout(predicate::str::contains("9 tracked transactions"))
        .stdout(predicate::str::contains("$164.64"))
        .stdout(predicate::str::contains("67%"))
        .stdout(predicate::str::contains("$718.24"))
        .stdout(predicate::str::contains("Whole Foods"))
        .stdout(predicate::str::contains("Spotify Family"));
}

#[test]
fn summary_filters_by_category() {
    outlay()
        .args(["summary", "--category", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Whole Foods"))
        .stdout(predicate::str::contains("Trader Joe's"))
        .stdout(predicate::str::contains("Urban Living").not())
        // Whole-store figures stay whole-store even when filtered
        .stdout(predicate::str::contains("$1481.76"));
}

#[test]
fn summary_rejects_unknown_category() {
    outlay()
        .args(["summary", "--category", "Vacations"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category: Vacations"));
}

#[test]
fn summary_emits_json() {
    outlay()
        .args(["summary", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 9"))
        .stdout(predicate::str::contains("\"total_spent\": 148176"))
        .stdout(predicate::str::contains("\"budget_used_percent\": 67"))
        .stdout(predicate::str::contains("\"overall_remaining\": 71824"));
}

#[test]
fn empty_session_starts_from_zero() {
    outlay()
        .args(["--empty", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$0.00"))
        .stdout(predicate::str::contains("0 tracked transactions"))
        .stdout(predicate::str::contains("No expenses recorded"))
        .stdout(predicate::str::contains("No upcoming payments"));
}

#[test]
fn currency_symbol_flag_applies_everywhere() {
    outlay()
        .args(["summary", "--currency-symbol", "€"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€1481.76"))
        .stdout(predicate::str::contains("$").not());
}
