use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{temp_file, wls, write_temp};

const CSV: &str = "2024-03-01,09:00,10:00,1:00,PROJ-1,work\n";

#[test]
fn test_help_lists_both_commands() {
    wls()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("create"))
        .stdout(contains("remove"));
}

#[test]
fn test_unknown_command_is_rejected() {
    wls()
        .args(["-f", "whatever.xlsx", "frobnicate"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Unknown command 'frobnicate'"));
}

#[test]
fn test_missing_command_is_rejected() {
    wls().args(["-f", "whatever.xlsx"]).assert().failure();
}

#[test]
fn test_equal_row_bounds_are_rejected_before_file_checks() {
    let missing = temp_file("cli_equal_bounds", "xlsx");
    wls()
        .args(["-f", missing.to_str().unwrap(), "-s", "3", "-e", "3", "create"])
        .assert()
        .failure()
        .stderr(contains("Invalid row window"))
        .stderr(contains("does not exist").not());
}

#[test]
fn test_end_before_start_is_rejected() {
    let missing = temp_file("cli_end_before_start", "xlsx");
    wls()
        .args(["remove", "-f", missing.to_str().unwrap(), "-s", "10", "-e", "4"])
        .assert()
        .failure()
        .stderr(contains("end row 4 is before start row 10"));
}

#[test]
fn test_missing_spreadsheet_is_rejected() {
    let missing = temp_file("cli_missing_file", "xlsx");
    let conf = write_temp("cli_missing_file", "conf", "");
    wls()
        .args([
            "--config",
            conf.to_str().unwrap(),
            "-f",
            missing.to_str().unwrap(),
            "-u",
            "https://jira.example.com",
            "-t",
            "secret",
            "create",
        ])
        .assert()
        .failure()
        .stderr(contains("does not exist"));
}

#[test]
fn test_file_flag_is_required() {
    let conf = write_temp("cli_no_file", "conf", "");
    wls()
        .args(["--config", conf.to_str().unwrap(), "create"])
        .assert()
        .failure()
        .stderr(contains("Missing setting 'file'"));
}

#[test]
fn test_token_is_required() {
    let sheet = write_temp("cli_no_token", "csv", CSV);
    let conf = write_temp("cli_no_token", "conf", "jira_url: https://jira.example.com\n");
    wls()
        .args([
            "--config",
            conf.to_str().unwrap(),
            "-f",
            sheet.to_str().unwrap(),
            "create",
        ])
        .assert()
        .failure()
        .stderr(contains("Missing setting 'jira-token'"));
}

#[test]
fn test_invalid_jira_url_is_rejected_without_network() {
    let sheet = write_temp("cli_bad_url", "csv", CSV);
    let conf = write_temp("cli_bad_url", "conf", "");
    wls()
        .args([
            "--config",
            conf.to_str().unwrap(),
            "-f",
            sheet.to_str().unwrap(),
            "-u",
            "not a url",
            "-t",
            "secret",
            "create",
        ])
        .assert()
        .failure()
        .stdout(contains("Dry run"))
        .stderr(contains("invalid Jira URL"));
}

#[test]
fn test_unknown_match_scope_is_rejected() {
    wls()
        .args(["remove", "--match-scope", "everything"])
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}

#[test]
fn test_unreachable_jira_fails_the_run() {
    let sheet = write_temp("cli_unreachable", "csv", CSV);
    let conf = write_temp("cli_unreachable", "conf", "");
    wls()
        .args([
            "--config",
            conf.to_str().unwrap(),
            "-f",
            sheet.to_str().unwrap(),
            "-u",
            "http://127.0.0.1:9",
            "-t",
            "secret",
            "--yes",
            "create",
        ])
        .assert()
        .failure()
        .stdout(contains("Dry run").not())
        .stderr(contains("HTTP error"));
}
