//! Integration tests for unclip-cli.
//!
//! Only flag handling is exercised here: any invocation that reaches the
//! pipeline depends on live clipboard state, which is not available (or
//! meaningful) on test machines.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn unclip_cmd() -> Command {
    cargo_bin_cmd!("unclip")
}

#[test]
fn test_version_flag() {
    unclip_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("unclip"));
}

#[test]
fn test_help_flag() {
    unclip_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipboard"))
        .stdout(predicate::str::contains("--log-format"));
}

#[test]
fn test_unknown_flag_exits_one() {
    unclip_cmd()
        .arg("--bogus")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_invalid_log_format_exits_one() {
    unclip_cmd()
        .arg("--log-format")
        .arg("yaml")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_unexpected_positional_exits_one() {
    unclip_cmd()
        .arg("leftover")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"));
}
