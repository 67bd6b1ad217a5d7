// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sync engine: one sequential pass over the pending queue.
//!
//! A pass snapshots the pending actions, sorts them by `created_at`, and
//! executes them one at a time. Each attempt marks the action `syncing`
//! (which counts the attempt), then either deletes it on success or marks
//! it `failed` with a classified message. Actions queued while a pass runs
//! wait for the next pass.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use mq_core::{ActionStatus, ActionStore, OfflineAction, ResourceCategory};

use crate::classify::{classify, FailureKind};
use crate::config::SyncConfig;
use crate::dispatch::{self, DispatchError};
use crate::remote::RemoteApi;
use crate::summary::{ActionResult, SyncSummary};
use crate::view::{NoopView, ViewState};

/// Clears the in-flight flag when a pass ends, however it ends.
struct PassGuard<'a>(&'a AtomicBool);

impl Drop for PassGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Replays queued actions against a [`RemoteApi`].
pub struct SyncEngine<A: RemoteApi> {
    store: Arc<ActionStore>,
    api: A,
    config: SyncConfig,
    view: Arc<dyn ViewState>,
    in_flight: AtomicBool,
}

impl<A: RemoteApi> SyncEngine<A> {
    /// Create an engine over a shared store.
    pub fn new(store: Arc<ActionStore>, api: A, config: SyncConfig) -> Self {
        SyncEngine {
            store,
            api,
            config,
            view: Arc::new(NoopView),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Report pass outcomes to `view`.
    pub fn with_view(mut self, view: Arc<dyn ViewState>) -> Self {
        self.view = view;
        self
    }

    /// Returns true while a pass (or manual retry) is running.
    pub fn is_syncing(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn try_begin(&self) -> Option<PassGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| PassGuard(&self.in_flight))
    }

    /// Execute every pending action in `created_at` order.
    ///
    /// Returns `None` without doing anything if another pass is in flight.
    /// A session-expiry failure stops the pass; the remaining actions stay
    /// pending.
    pub async fn sync_pending_actions(&self) -> Option<SyncSummary> {
        let Some(_guard) = self.try_begin() else {
            tracing::debug!("sync pass already in flight, skipping");
            return None;
        };

        // No attempt can be live here, so any syncing record was interrupted.
        self.store.recover_interrupted();

        let mut pending = self.store.get_pending();
        if pending.is_empty() {
            return Some(SyncSummary::default());
        }
        pending.sort_by_key(|action| action.created_at);

        tracing::info!("sync pass starting: {} pending action(s)", pending.len());

        let mut summary = SyncSummary::default();
        let mut touched = BTreeSet::new();

        for (index, action) in pending.iter().enumerate() {
            if summary.requires_reauth {
                tracing::info!(
                    "session expired, leaving {} action(s) pending",
                    pending.len() - index
                );
                break;
            }

            let Some(result) = self.attempt(action).await else {
                continue;
            };
            if result.success {
                touched.insert(action.action_type().category());
            }
            summary.record(result);
        }

        self.finish(&summary, touched);
        Some(summary)
    }

    /// Reset a failed action to pending and attempt it right away.
    ///
    /// Returns `None` if a pass is in flight, or if the action is missing or
    /// not failed.
    pub async fn retry_action(&self, id: &str) -> Option<ActionResult> {
        let Some(_guard) = self.try_begin() else {
            tracing::debug!("sync pass in flight, not retrying {id}");
            return None;
        };

        if !self.store.retry(id) {
            tracing::debug!("action {id} is not failed, nothing to retry");
            return None;
        }
        let action = self.store.get(id)?;
        let result = self.attempt(&action).await?;

        let mut touched = BTreeSet::new();
        if result.success {
            touched.insert(action.action_type().category());
        }
        let mut summary = SyncSummary::default();
        summary.record(result.clone());
        self.finish(&summary, touched);

        Some(result)
    }

    /// Run a single attempt. Returns `None` if the action vanished before it
    /// could be marked `syncing` (e.g. dismissed while queued).
    async fn attempt(&self, action: &OfflineAction) -> Option<ActionResult> {
        let delay = self.config.backoff_delay(action.retry_count);
        if !delay.is_zero() {
            tracing::debug!(id = %action.id, ?delay, "backing off before retry");
            tokio::time::sleep(delay).await;
        }

        if !self
            .store
            .update_status(&action.id, ActionStatus::Syncing, None)
        {
            tracing::debug!(id = %action.id, "action no longer queued, skipping");
            return None;
        }
        let attempt = action.retry_count.saturating_add(1);
        tracing::debug!(id = %action.id, kind = %action.action_type(), attempt, "executing action");

        match dispatch::execute(&self.api, action).await {
            Ok(()) => {
                // Absence of the record is the success signal.
                if !self.store.delete(&action.id) {
                    tracing::warn!(
                        id = %action.id,
                        "synced action could not be removed and may be replayed"
                    );
                }
                Some(ActionResult::succeeded(&action.id, action.action_type()))
            }
            Err(error) => {
                let kind = classify(&error);
                let message = self.failure_message(kind, &error, attempt);
                if kind.is_terminal() || attempt >= self.config.max_retry_count {
                    tracing::warn!(id = %action.id, ?kind, "action failed: {message}");
                } else {
                    tracing::info!(id = %action.id, attempt, "action failed, retryable: {message}");
                }
                self.store
                    .update_status(&action.id, ActionStatus::Failed, Some(&message));
                Some(ActionResult::failed(
                    &action.id,
                    action.action_type(),
                    message,
                    kind.halts_pass(),
                ))
            }
        }
    }

    fn failure_message(&self, kind: FailureKind, error: &DispatchError, attempt: u32) -> String {
        match kind {
            FailureKind::SessionExpired => format!("session expired: {error}"),
            FailureKind::Conflict => format!("conflict: {error}"),
            FailureKind::Unsupported => format!("unsupported action: {error}"),
            FailureKind::Transient if attempt >= self.config.max_retry_count => {
                format!("failed after {attempt} attempts: {error}")
            }
            FailureKind::Transient => error.to_string(),
        }
    }

    fn finish(&self, summary: &SyncSummary, touched: BTreeSet<ResourceCategory>) {
        if summary.is_empty() {
            return;
        }

        tracing::info!(
            processed = summary.processed,
            succeeded = summary.succeeded,
            failed = summary.failed,
            requires_reauth = summary.requires_reauth,
            "sync pass finished"
        );

        if summary.succeeded > 0 {
            let categories: Vec<ResourceCategory> = touched.into_iter().collect();
            self.view.invalidate(&categories);
        }
        self.view.sync_completed(summary, self.store.counts());
    }
}
