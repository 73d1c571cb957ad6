use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn script_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("home_budget_cli").unwrap();
    cmd.env("HOME_BUDGET_CLI_SCRIPT", "1")
        .env("HOME_BUDGET_HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_runs_household_flow() {
    let home = TempDir::new().unwrap();
    let input = "members 2\nincome\n5k\n2000\nexpenses 20000 0 0 0 0 0 0 0 0 0\nwish Bike 15000\nview\nexit\n";

    script_cmd(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Total Income: PKR7000.00"))
        .stdout(contains("Total Expenses: PKR35000.00"))
        .stdout(contains("Savings: PKR-28000.00"))
        .stdout(contains("Bike                     : PKR15000.00"))
        .stdout(contains("Exiting the program. Goodbye!"));
}

#[test]
fn save_writes_analysis_file() {
    let home = TempDir::new().unwrap();
    let target = home.path().join("analysis.txt");
    let input = format!(
        "income 50000\nwish Bike 15000\nsave \"{}\"\nexit\n",
        target.display()
    );

    script_cmd(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("saved to"));

    let text = std::fs::read_to_string(&target).unwrap();
    assert!(text.starts_with("Expense Analysis:"));
    assert!(text.contains("Non-Essential"));
    assert!(text.contains("Remaining Balance: PKR35000.00"));
    assert!(text.trim_end().ends_with("========================================"));
}

#[test]
fn failed_save_keeps_session_alive() {
    let home = TempDir::new().unwrap();
    let target = home.path().join("missing").join("analysis.txt");
    let input = format!(
        "wish Bike 15000\nsave \"{}\"\nview\nexit\n",
        target.display()
    );

    script_cmd(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Unable to write"))
        .stdout(contains("Total Expenses: PKR15000.00"));
    assert!(!target.exists());
}

#[test]
fn percent_without_expenses_reports_division_by_zero() {
    let home = TempDir::new().unwrap();
    script_cmd(&home)
        .write_stdin("percent\nwish Bike 300\nwish Books 100\npercent\n")
        .assert()
        .success()
        .stdout(contains("Cannot compute expense percentages"))
        .stdout(contains("Bike                     : 75.00%"))
        .stdout(contains("NaN").not());
}

#[test]
fn goals_report_progress_and_achievement() {
    let home = TempDir::new().unwrap();
    let input = "goals add \"Emergency Fund\" 100k\ngoals contribute \"Emergency Fund\" 100k\ngoals view\nexit\n";

    script_cmd(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains(
            "Emergency Fund           : PKR100000.00 / PKR100000.00 (Progress: 100.00%)",
        ))
        .stdout(contains("Congratulations! The goal is achieved."));
}

#[test]
fn goal_submenu_without_goals() {
    let home = TempDir::new().unwrap();
    script_cmd(&home)
        .write_stdin("9\n2\n4\nexit\n")
        .assert()
        .success()
        .stdout(contains("No financial goals set yet."))
        .stdout(contains("Exiting Financial Goals Management."));
}

#[test]
fn config_changes_persist_between_runs() {
    let home = TempDir::new().unwrap();
    script_cmd(&home)
        .write_stdin("config set currency USD\nexit\n")
        .assert()
        .success();

    script_cmd(&home)
        .write_stdin("income 5k\nview\n")
        .assert()
        .success()
        .stdout(contains("Total Income: USD5000.00"));
}

#[test]
fn unknown_command_suggests_closest_match() {
    let home = TempDir::new().unwrap();
    script_cmd(&home)
        .write_stdin("incme\nexit\n")
        .assert()
        .success()
        .stdout(contains("Did you mean `income`?"));
}

#[test]
fn version_prints_package_version() {
    let home = TempDir::new().unwrap();
    script_cmd(&home)
        .write_stdin("version\n")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}
