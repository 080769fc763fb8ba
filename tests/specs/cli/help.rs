// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the `sprintlens` argument surface. These never touch the
//! network: they only exercise parsing and help output.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use yare::parameterized;

fn sprintlens() -> Command {
    cargo_bin_cmd!("sprintlens")
}

#[test]
fn no_arguments_shows_usage_and_fails() {
    sprintlens()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_all_commands() {
    sprintlens()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("boards"))
        .stdout(predicate::str::contains("sprints"))
        .stdout(predicate::str::contains("analyze"));
}

#[parameterized(
    boards = { "boards" },
    sprints = { "sprints" },
    analyze = { "analyze" },
)]
fn command_supports_help_flag(command: &str) {
    sprintlens()
        .arg(command)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_prints_version() {
    sprintlens()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sprintlens"));
}

#[test]
fn sprints_without_board_fails_with_usage() {
    sprintlens()
        .arg("sprints")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--board"));
}

#[test]
fn analyze_without_sprint_fails_with_usage() {
    sprintlens()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--sprint"));
}

#[test]
fn unknown_command_fails() {
    sprintlens().arg("frobnicate").assert().failure();
}
