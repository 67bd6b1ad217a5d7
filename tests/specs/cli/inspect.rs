// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only commands: status, list, show.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

#[test]
fn status_counts_by_state() {
    let queue = Queue::new();
    queue.seed(apply("ex-1"));
    let failed = queue.seed(apply("ex-2"));
    queue.fail(&failed, "timeout");

    queue
        .mutq()
        .arg("status")
        .assert()
        .success()
        .stdout("pending: 1\nsyncing: 0\nfailed:  1\n");
}

#[test]
fn status_json() {
    let queue = Queue::new();
    queue.seed(apply("ex-1"));

    let output = queue.mutq().args(["status", "-o", "json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["pending"], 1);
    assert_eq!(value["failed"], 0);
}

#[test]
fn list_shows_actions_in_queue_order() {
    let queue = Queue::new();
    let first = queue.seed(apply("ex-1"));
    let second = queue.seed(mq_core::ActionPayload::withdraw_from_exchange("ex-1"));

    let output = queue.mutq().arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(&first));
    assert!(lines[0].contains("[apply-for-exchange] (pending)"));
    assert!(lines[1].contains(&second));
    assert!(lines[1].contains("[withdraw-from-exchange] (pending)"));
}

#[test]
fn list_filters_by_status() {
    let queue = Queue::new();
    queue.seed(apply("ex-1"));
    let failed = queue.seed(apply("ex-2"));
    queue.fail(&failed, "conflict: exchange already taken");

    queue
        .mutq()
        .args(["list", "-s", "failed"])
        .assert()
        .success()
        .stdout(predicate::str::contains(failed.as_str()))
        .stdout(predicate::str::contains("conflict: exchange already taken"))
        .stdout(predicate::str::contains("(pending)").not());
}

#[test]
fn list_rejects_unknown_status() {
    let queue = Queue::new();
    queue
        .mutq()
        .args(["list", "-s", "synced"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid action status"));
}

#[test]
fn list_empty_queue() {
    let queue = Queue::new();
    queue
        .mutq()
        .arg("list")
        .assert()
        .success()
        .stdout("No actions queued.\n");
}

#[test]
fn show_displays_details() {
    let queue = Queue::new();
    let id = queue.seed(apply("ex-1"));
    queue.fail(&id, "timeout");

    queue
        .mutq()
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("[apply-for-exchange] {id}")))
        .stdout(predicate::str::contains("Status: failed"))
        .stdout(predicate::str::contains("Attempts: 1"))
        .stdout(predicate::str::contains("Error: timeout"))
        .stdout(predicate::str::contains("\"exchangeId\": \"ex-1\""));
}

#[test]
fn show_json() {
    let queue = Queue::new();
    let id = queue.seed(apply("ex-1"));

    let output = queue.mutq().args(["show", &id, "-o", "json"]).output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["id"], id.as_str());
    assert_eq!(value["type"], "apply-for-exchange");
    assert_eq!(value["retryCount"], 0);
}

#[test]
fn show_unknown_id_fails() {
    let queue = Queue::new();
    queue
        .mutq()
        .args(["show", "act-000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("action not found: act-000000000000"));
}
