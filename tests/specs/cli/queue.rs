// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commands that change the queue: retry, dismiss, recover, clear.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use mq_core::ActionStatus;

#[test]
fn retry_requeues_failed_action() {
    let queue = Queue::new();
    let id = queue.seed(apply("ex-1"));
    queue.fail(&id, "timeout");

    queue
        .mutq()
        .args(["retry", &id])
        .assert()
        .success()
        .stdout(format!("Requeued {id}\n"));

    assert_eq!(queue.status_of(&id), Some(ActionStatus::Pending));
}

#[test]
fn retry_pending_action_fails_with_hint() {
    let queue = Queue::new();
    let id = queue.seed(apply("ex-1"));

    queue
        .mutq()
        .args(["retry", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is pending, not failed"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn retry_all() {
    let queue = Queue::new();
    let a = queue.seed(apply("ex-1"));
    let b = queue.seed(apply("ex-2"));
    queue.fail(&a, "timeout");
    queue.fail(&b, "timeout");

    queue
        .mutq()
        .args(["retry", "--all"])
        .assert()
        .success()
        .stdout("Requeued 2 failed action(s)\n");

    assert_eq!(queue.status_of(&a), Some(ActionStatus::Pending));
    assert_eq!(queue.status_of(&b), Some(ActionStatus::Pending));
}

#[test]
fn retry_requires_ids_or_all() {
    let queue = Queue::new();
    queue.mutq().arg("retry").assert().failure();
}

#[test]
fn dismiss_removes_actions() {
    let queue = Queue::new();
    let a = queue.seed(apply("ex-1"));
    let b = queue.seed(apply("ex-2"));

    queue
        .mutq()
        .args(["dismiss", &a, &b])
        .assert()
        .success()
        .stdout(format!("Dismissed {a}\nDismissed {b}\n"));

    assert_eq!(queue.status_of(&a), None);
    assert_eq!(queue.status_of(&b), None);
}

#[test]
fn dismiss_reports_partial_failure() {
    let queue = Queue::new();
    let a = queue.seed(apply("ex-1"));

    queue
        .mutq()
        .args(["dismiss", &a, "act-000000000000"])
        .assert()
        .failure()
        .stdout(format!("Dismissed {a}\n"))
        .stderr(predicate::str::contains("action not found: act-000000000000"))
        .stderr(predicate::str::contains("1 succeeded, 1 failed"));
}

#[test]
fn recover_requeues_interrupted_actions() {
    let queue = Queue::new();
    let id = queue.seed(apply("ex-1"));
    queue.interrupt(&id);

    queue
        .mutq()
        .arg("recover")
        .assert()
        .success()
        .stdout("Recovered 1 interrupted action(s)\n");

    assert_eq!(queue.status_of(&id), Some(ActionStatus::Pending));
}

#[test]
fn clear_empties_queue() {
    let queue = Queue::new();
    let id = queue.seed(apply("ex-1"));
    queue.seed(apply("ex-2"));

    queue
        .mutq()
        .arg("clear")
        .assert()
        .success()
        .stdout("Cleared 2 action(s)\n");

    assert_eq!(queue.status_of(&id), None);
    queue
        .mutq()
        .arg("status")
        .assert()
        .success()
        .stdout("Queue is empty.\n");
}
