// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Connectivity trigger: run a pass whenever the app comes back online.

use tokio::sync::watch;

use crate::engine::SyncEngine;
use crate::remote::RemoteApi;

/// Drive `engine` from a connectivity signal.
///
/// Runs one pass immediately if `online` is already `true`, then one pass on
/// every offline-to-online transition. Returns once the sender is dropped.
/// Transitions that arrive mid-pass are folded into the latest value, so a
/// flapping connection triggers at most one follow-up pass.
pub async fn run_on_reconnect<A: RemoteApi>(
    engine: &SyncEngine<A>,
    mut online: watch::Receiver<bool>,
) {
    let mut was_online = false;

    loop {
        let is_online = *online.borrow_and_update();
        if is_online && !was_online {
            tracing::info!("connectivity restored, syncing queued actions");
            match engine.sync_pending_actions().await {
                Some(summary) if !summary.is_empty() => {
                    tracing::info!(
                        "reconnect sync: {} succeeded, {} failed",
                        summary.succeeded,
                        summary.failed
                    );
                }
                Some(_) => {}
                None => tracing::debug!("reconnect sync skipped, pass already running"),
            }
        }
        was_online = is_online;

        if online.changed().await.is_err() {
            tracing::debug!("connectivity signal closed");
            break;
        }
    }
}
