// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for configuration resolution. Commands are run in an empty
//! temp directory with the override variables cleared, so the missing
//! settings surface before any network call is attempted.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sprintlens_in(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("sprintlens");
    cmd.current_dir(dir.path())
        .env_remove("SPRINTLENS_JIRA_URL")
        .env_remove("SPRINTLENS_JIRA_EMAIL")
        .env_remove("SPRINTLENS_JIRA_TOKEN")
        .env_remove("SPRINTLENS_GEMINI_API_KEY")
        .env_remove("SPRINTLENS_GEMINI_MODEL");
    cmd
}

#[test]
fn boards_without_configuration_reports_missing_url() {
    let temp = TempDir::new().unwrap();
    sprintlens_in(&temp)
        .arg("boards")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing tracker configuration"))
        .stderr(predicate::str::contains("tracker url"));
}

#[test]
fn partial_configuration_reports_next_missing_setting() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("sprintlens.toml"),
        "[jira]\nurl = \"https://acme.atlassian.net\"\n",
    )
    .unwrap();

    sprintlens_in(&temp)
        .arg("boards")
        .assert()
        .failure()
        .stderr(predicate::str::contains("tracker email"));
}

#[test]
fn environment_overrides_are_honored() {
    // A URL from the environment moves the failure past the url check.
    let temp = TempDir::new().unwrap();
    sprintlens_in(&temp)
        .arg("boards")
        .env("SPRINTLENS_JIRA_URL", "https://acme.atlassian.net")
        .assert()
        .failure()
        .stderr(predicate::str::contains("tracker email"));
}

#[test]
fn explicit_config_path_must_exist() {
    let temp = TempDir::new().unwrap();
    sprintlens_in(&temp)
        .arg("boards")
        .arg("--config")
        .arg("nope.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn malformed_config_file_is_reported() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("sprintlens.toml"), "not toml [").unwrap();

    sprintlens_in(&temp)
        .arg("boards")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}
