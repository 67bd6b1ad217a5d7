// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file handling.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

#[test]
fn missing_config_file_fails() {
    let temp = TempDir::new().unwrap();
    mutq()
        .arg("--config")
        .arg(temp.path().join("absent.toml"))
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
}

#[test]
fn malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(&config, "[sync\n").unwrap();

    mutq()
        .arg("--config")
        .arg(&config)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn database_is_created_under_config_dir() {
    let queue = Queue::new();
    assert!(!queue.db.exists());

    queue
        .mutq()
        .arg("status")
        .assert()
        .success()
        .stdout("Queue is empty.\n");

    assert!(queue.db.exists());
}

#[test]
fn sync_table_changes_exhaustion_marker() {
    let queue = Queue::new();
    std::fs::write(
        &queue.config,
        "database = \"queue.db\"\n\n[sync]\nmax_retry_count = 1\n",
    )
    .unwrap();
    let id = queue.seed(apply("ex-1"));
    queue.fail(&id, "timeout");

    queue
        .mutq()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("(failed, gave up)"));
}
