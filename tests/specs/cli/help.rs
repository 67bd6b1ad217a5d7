// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help and version output.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

#[test]
fn help_lists_commands() {
    mutq()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("retry"))
        .stdout(predicate::str::contains("dismiss"));
}

#[test]
fn no_arguments_fails_with_usage() {
    mutq()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[parameterized(
    status = { "status" },
    list = { "list" },
    show = { "show" },
    retry = { "retry" },
    dismiss = { "dismiss" },
    recover = { "recover" },
    clear = { "clear" },
)]
fn command_supports_help_flag(cmd: &str) {
    mutq()
        .args([cmd, "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_outputs_version() {
    mutq()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("mutq "));
}

#[test]
fn recover_help_warns_about_live_passes() {
    mutq()
        .args(["recover", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Only run this while no app is syncing"));
}
