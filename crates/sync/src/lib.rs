// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mq-sync: Replays queued offline actions against the remote API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ SyncEngine  │────►│  dispatch   │────►│  RemoteApi  │
//! │  (one pass) │◄────│ (per type)  │◄────│   (trait)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │  ▲
//!        ▼  │
//! ┌─────────────┐     ┌─────────────┐
//! │ ActionStore │     │  ViewState  │  (summary, counts, invalidation)
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Features
//!
//! - Strict `created_at` ordering within a pass, no pipelining
//! - Exponential backoff before each retry attempt
//! - Failure classification: session expiry, conflict, transient
//! - Session expiry halts the rest of the pass
//! - Single pass in flight; overlapping calls return `None`
//! - Injectable remote API trait for testing

mod classify;
mod config;
mod connectivity;
mod dispatch;
mod engine;
mod remote;
mod summary;
mod view;

pub use classify::{classify, FailureKind};
pub use config::SyncConfig;
pub use connectivity::run_on_reconnect;
pub use dispatch::{execute, DispatchError};
pub use engine::SyncEngine;
pub use remote::{RemoteApi, RemoteError, RemoteFuture, RemoteResult};
pub use summary::{ActionResult, SyncSummary};
pub use view::{NoopView, ViewState};

#[cfg(test)]
mod test_helpers;
