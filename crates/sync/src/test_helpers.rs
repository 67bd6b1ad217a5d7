// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync tests.

#![allow(clippy::unwrap_used)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use mq_core::{ActionStore, ClockSource, QueueCounts, ResourceCategory, StoreHandle};
use serde_json::Value;
use tokio::time::Instant;

use crate::remote::{RemoteApi, RemoteError, RemoteFuture};
use crate::summary::SyncSummary;
use crate::view::ViewState;

/// Clock that advances by a fixed step per reading (one second by default).
pub struct StepClock {
    time_ms: AtomicI64,
    step_ms: i64,
}

impl StepClock {
    pub fn new(initial_ms: i64) -> Self {
        Self::with_step(initial_ms, 1000)
    }

    /// A step of zero stamps every action with the same time.
    pub fn with_step(initial_ms: i64, step_ms: i64) -> Self {
        StepClock {
            time_ms: AtomicI64::new(initial_ms),
            step_ms,
        }
    }
}

impl ClockSource for StepClock {
    fn now_ms(&self) -> i64 {
        self.time_ms.fetch_add(self.step_ms, Ordering::SeqCst)
    }
}

/// In-memory store with deterministic timestamps.
pub fn memory_store() -> Arc<ActionStore> {
    Arc::new(ActionStore::with_clock(
        StoreHandle::open_in_memory(),
        Arc::new(StepClock::new(1000)),
    ))
}

/// Remote API that records calls and fails on demand.
///
/// Calls are logged as `"<method>:<target>"`, e.g. `"take_over:ex-1"`.
#[derive(Clone, Default)]
pub struct MockApi {
    calls: Arc<Mutex<Vec<(String, Instant)>>>,
    /// Failures to return, keyed by call target, consumed front to back.
    failures: Arc<Mutex<HashMap<String, VecDeque<RemoteError>>>>,
    /// Targets that fail on every call.
    always_fail: Arc<Mutex<HashMap<String, RemoteError>>>,
    latency: Option<Duration>,
}

impl MockApi {
    pub fn new() -> Self {
        MockApi::default()
    }

    /// Every call sleeps for `latency` before resolving.
    pub fn with_latency(latency: Duration) -> Self {
        MockApi {
            latency: Some(latency),
            ..MockApi::default()
        }
    }

    /// Fail the next call targeting `target`.
    pub fn fail_next(&self, target: &str, error: RemoteError) {
        self.failures
            .lock()
            .unwrap()
            .entry(target.to_string())
            .or_default()
            .push_back(error);
    }

    /// Fail every call targeting `target`.
    pub fn fail_always(&self, target: &str, error: RemoteError) {
        self.always_fail
            .lock()
            .unwrap()
            .insert(target.to_string(), error);
    }

    /// Recorded calls, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(call, _)| call.clone())
            .collect()
    }

    /// Instants at which each call was made.
    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().iter().map(|(_, at)| *at).collect()
    }

    fn respond<'a>(&'a self, method: &'static str, target: &'a str) -> RemoteFuture<'a> {
        Box::pin(async move {
            self.calls
                .lock()
                .unwrap()
                .push((format!("{method}:{target}"), Instant::now()));
            if let Some(latency) = self.latency {
                tokio::time::sleep(latency).await;
            }
            if let Some(error) = self.always_fail.lock().unwrap().get(target) {
                return Err(error.clone());
            }
            let scripted = self
                .failures
                .lock()
                .unwrap()
                .get_mut(target)
                .and_then(VecDeque::pop_front);
            match scripted {
                Some(error) => Err(error),
                None => Ok(()),
            }
        })
    }
}

impl RemoteApi for MockApi {
    fn update_record<'a>(&'a self, record_id: &'a str, _data: &'a Value) -> RemoteFuture<'a> {
        self.respond("update", record_id)
    }

    fn take_over_exchange<'a>(&'a self, exchange_id: &'a str) -> RemoteFuture<'a> {
        self.respond("take_over", exchange_id)
    }

    fn withdraw_from_exchange<'a>(&'a self, exchange_id: &'a str) -> RemoteFuture<'a> {
        self.respond("withdraw", exchange_id)
    }

    fn publish_to_exchange<'a>(&'a self, source_id: &'a str) -> RemoteFuture<'a> {
        self.respond("publish", source_id)
    }
}

/// View state that records every notification.
#[derive(Default)]
pub struct RecordingView {
    pub invalidated: Mutex<Vec<Vec<ResourceCategory>>>,
    pub completed: Mutex<Vec<(SyncSummary, QueueCounts)>>,
}

impl ViewState for RecordingView {
    fn invalidate(&self, categories: &[ResourceCategory]) {
        self.invalidated.lock().unwrap().push(categories.to_vec());
    }

    fn sync_completed(&self, summary: &SyncSummary, counts: QueueCounts) {
        self.completed
            .lock()
            .unwrap()
            .push((summary.clone(), counts));
    }
}
