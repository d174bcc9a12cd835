use assert_cmd::Command;
use predicates::prelude::*;

fn newsroom_cmd() -> Command {
    Command::cargo_bin("newsroom").unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    newsroom_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("fetch"));
}

#[test]
fn test_fetch_help_shows_filters() {
    newsroom_cmd()
        .arg("fetch")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--page-size"))
        .stdout(predicate::str::contains("--category"));
}

#[test]
fn test_serve_help_shows_port() {
    newsroom_cmd()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"));
}

#[test]
fn test_fetch_rejects_invalid_url() {
    newsroom_cmd()
        .arg("fetch")
        .arg("not a url")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid feed URL"));
}

#[test]
fn test_invalid_port_setting_fails() {
    newsroom_cmd()
        .arg("serve")
        .env("NEWSROOM_PORT", "eighty")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NEWSROOM_PORT"));
}
