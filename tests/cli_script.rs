use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use regex::Regex;

fn script_cmd() -> Command {
    let mut cmd = Command::cargo_bin("expense_tracker").unwrap();
    cmd.env("EXPENSE_TRACKER_SCRIPT", "1")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let input = "1000\n\
2024-01-01\nFood\n100\n\
2024-01-02\nTravel\n50\n\
2024-01-08\nFood\n20\n\
done\n";

    script_cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Total expenses for the day: ₹150.00").not())
        .stdout(contains("Week from 2024-01-01 to 2024-01-07"))
        .stdout(contains("Total expenses for the week: ₹150.00"))
        .stdout(contains("Total expenses for the week: ₹20.00"))
        .stdout(contains("Month: January (01)"))
        .stdout(contains("Food: ₹120.00"))
        .stdout(contains("Total expenses for the month: ₹170.00"))
        .stdout(contains("Warning: Expenses exceed the monthly budget!").not());
}

#[test]
fn over_budget_warning_is_printed() {
    script_cmd()
        .write_stdin("100\n2024-05-10\nBills\n100.01\ndone\n")
        .assert()
        .success()
        .stdout(contains("Warning: Expenses exceed the monthly budget!"));
}

#[test]
fn bad_amount_is_recovered_instead_of_aborting() {
    let assert = script_cmd()
        .write_stdin("50\n2024-05-10\nFood\nabc\n2024-05-10\nFood\n12.5\ndone\n")
        .assert()
        .success()
        .stdout(contains("[x] Invalid amount `abc`"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let amounts = Regex::new(r"Food: ₹(\d+\.\d{2})").unwrap();
    let found: Vec<_> = amounts
        .captures_iter(&stdout)
        .map(|caps| caps[1].to_string())
        .collect();
    // daily, weekly, monthly
    assert_eq!(found, vec!["12.50", "12.50", "12.50"]);
}

#[test]
fn missing_budget_fails_with_error() {
    script_cmd()
        .write_stdin("not a number\n")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: Invalid input: input ended before a monthly budget was entered"));
}

#[test]
fn done_is_case_insensitive() {
    script_cmd()
        .write_stdin("10\nDoNe\n")
        .assert()
        .success()
        .stdout(contains("Total expenses for the month: ₹0.00"));
}

#[test]
fn signed_extended_years_are_rejected_as_dates() {
    script_cmd()
        .write_stdin("100\n-262143-01-01\nFood\n5\n+262142-12-31\nFood\n5\ndone\n")
        .assert()
        .success()
        .stdout(contains("Invalid date format `-262143-01-01`"))
        .stdout(contains("Invalid date format `+262142-12-31`"))
        .stdout(contains("Total expenses for the month: ₹0.00"));
}

#[test]
fn week_and_month_list_records_in_entry_order() {
    let assert = script_cmd()
        .write_stdin("100\n2024-01-03\nTravel\n5\n2024-01-01\nFood\n7\ndone\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains(
        "Week from 2024-01-01 to 2024-01-07\nTravel: ₹5.00\nFood: ₹7.00\nTotal expenses for the week: ₹12.00"
    ));
    assert!(stdout.contains("Month: January (01)\nTravel: ₹5.00\nFood: ₹7.00\n"));
    let first_day = stdout.find("Date: 2024-01-01").unwrap();
    let second_day = stdout.find("Date: 2024-01-03").unwrap();
    assert!(first_day < second_day);
}
