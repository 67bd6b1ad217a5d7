// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Durable action store that never fails its callers.
//!
//! [`ActionStore`] wraps a [`StoreHandle`] and turns every storage failure
//! into a sentinel: `None`, `false`, `0`, or an empty list. The cause is
//! logged with `tracing`. Offline work is lost only when storage itself is
//! unusable, and the caller learns about it from `create` returning `None`.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::action::{ActionPayload, ActionStatus, OfflineAction, QueueCounts};
use crate::clock::{ClockSource, SystemClock};
use crate::db::Database;
use crate::error::{Error, Result};
use crate::id::generate_unique_id;

/// Owned handle to the persistent store.
///
/// A handle is either open (wrapping a [`Database`]) or unavailable. It can
/// be closed explicitly; every later operation then degrades.
pub struct StoreHandle {
    db: Mutex<Option<Database>>,
}

impl StoreHandle {
    /// Open the database at `path`, propagating failures.
    pub fn try_open(path: &Path) -> Result<Self> {
        Ok(Self::from_database(Database::open(path)?))
    }

    /// Open the database at `path`, degrading to an unavailable handle on failure.
    pub fn open(path: &Path) -> Self {
        match Self::try_open(path) {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!("action store unavailable at {}: {}", path.display(), e);
                Self::unavailable()
            }
        }
    }

    /// Open a fresh in-memory database.
    pub fn open_in_memory() -> Self {
        match Database::open_in_memory() {
            Ok(db) => Self::from_database(db),
            Err(e) => {
                tracing::warn!("in-memory action store unavailable: {}", e);
                Self::unavailable()
            }
        }
    }

    /// Wrap an already opened database.
    pub fn from_database(db: Database) -> Self {
        StoreHandle {
            db: Mutex::new(Some(db)),
        }
    }

    /// A handle with no backing storage (storage disabled).
    pub fn unavailable() -> Self {
        StoreHandle {
            db: Mutex::new(None),
        }
    }

    /// Close the underlying connection. Idempotent.
    pub fn close(&self) {
        if self.lock().take().is_some() {
            tracing::debug!("action store closed");
        }
    }

    /// Returns true while the handle has a usable connection.
    pub fn is_open(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Database>> {
        // A panic mid-statement cannot leave SQLite half-written.
        self.db.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Run `f` against the database, logging and swallowing any failure.
    fn with_db<T>(&self, op: &str, f: impl FnOnce(&Database) -> Result<T>) -> Option<T> {
        let guard = self.lock();
        let result = match guard.as_ref() {
            Some(db) => f(db),
            None => Err(Error::StoreUnavailable),
        };
        match result {
            Ok(value) => Some(value),
            Err(Error::StoreUnavailable) => {
                tracing::debug!("{op}: action store unavailable");
                None
            }
            Err(e) => {
                tracing::warn!("{op} failed: {e}");
                None
            }
        }
    }
}

/// CRUD over queued actions with no business logic.
pub struct ActionStore {
    handle: StoreHandle,
    clock: Arc<dyn ClockSource>,
}

impl ActionStore {
    /// Create a store over `handle`, stamping actions with the system clock.
    pub fn new(handle: StoreHandle) -> Self {
        Self::with_clock(handle, Arc::new(SystemClock))
    }

    /// Create a store with a custom clock source.
    pub fn with_clock(handle: StoreHandle, clock: Arc<dyn ClockSource>) -> Self {
        ActionStore { handle, clock }
    }

    /// The underlying handle, for lifecycle control.
    pub fn handle(&self) -> &StoreHandle {
        &self.handle
    }

    /// Queue a new action.
    ///
    /// Returns `None` if the action could not be persisted. Callers must
    /// surface that to the user rather than drop the mutation.
    pub fn create(&self, payload: ActionPayload) -> Option<OfflineAction> {
        let created_at = self.clock.now_ms();
        self.handle.with_db("create", |db| {
            let body = serde_json::to_string(&payload.body()?)?;
            let id = generate_unique_id(
                payload.action_type().as_str(),
                &body,
                created_at,
                |candidate| db.action_exists(candidate).unwrap_or(false),
            );
            let action = OfflineAction::new(id, payload, created_at);
            db.insert_action(&action)?;
            tracing::debug!(id = %action.id, kind = %action.action_type(), "queued action");
            Ok(action)
        })
    }

    /// Fetch a single action.
    pub fn get(&self, id: &str) -> Option<OfflineAction> {
        self.handle.with_db("get", |db| db.get_action(id)).flatten()
    }

    /// All actions with the given status. Callers sort when order matters.
    pub fn get_by_status(&self, status: ActionStatus) -> Vec<OfflineAction> {
        self.handle
            .with_db("get_by_status", |db| db.list_by_status(status))
            .unwrap_or_default()
    }

    /// All pending actions.
    pub fn get_pending(&self) -> Vec<OfflineAction> {
        self.get_by_status(ActionStatus::Pending)
    }

    /// All failed actions.
    pub fn get_failed(&self) -> Vec<OfflineAction> {
        self.get_by_status(ActionStatus::Failed)
    }

    /// Every stored action, oldest first.
    pub fn get_all(&self) -> Vec<OfflineAction> {
        self.handle
            .with_db("get_all", |db| db.list_all())
            .unwrap_or_default()
    }

    /// Set an action's status, incrementing its retry count when the new
    /// status is `syncing`. A `None` error keeps the prior message.
    ///
    /// Returns false if the action no longer exists; that is not an error.
    pub fn update_status(&self, id: &str, status: ActionStatus, error: Option<&str>) -> bool {
        self.handle
            .with_db("update_status", |db| db.update_status(id, status, error))
            .unwrap_or(false)
    }

    /// Delete an action. Deletion is how a successful sync is recorded.
    pub fn delete(&self, id: &str) -> bool {
        self.handle
            .with_db("delete", |db| db.delete_action(id))
            .unwrap_or(false)
    }

    /// Remove every action (logout/reset).
    pub fn clear(&self) -> bool {
        self.handle.with_db("clear", |db| db.clear()).is_some()
    }

    /// Number of stored actions per status.
    pub fn counts(&self) -> QueueCounts {
        self.handle
            .with_db("counts", |db| db.count_by_status())
            .unwrap_or_default()
    }

    /// Reset a failed action to pending so the next pass picks it up.
    ///
    /// Retry count and last error are kept. Returns false if the action is
    /// absent or not failed.
    pub fn retry(&self, id: &str) -> bool {
        self.handle
            .with_db("retry", |db| {
                db.transition(id, ActionStatus::Failed, ActionStatus::Pending)
            })
            .unwrap_or(false)
    }

    /// Reset every failed action to pending. Returns the number reset.
    pub fn retry_all_failed(&self) -> usize {
        self.handle
            .with_db("retry_all_failed", |db| {
                db.transition_all(ActionStatus::Failed, ActionStatus::Pending)
            })
            .unwrap_or(0)
    }

    /// Reset actions left in `syncing` by an interrupted attempt.
    ///
    /// Must not run while a sync pass is in flight.
    pub fn recover_interrupted(&self) -> usize {
        let recovered = self
            .handle
            .with_db("recover_interrupted", |db| {
                db.transition_all(ActionStatus::Syncing, ActionStatus::Pending)
            })
            .unwrap_or(0);
        if recovered > 0 {
            tracing::info!("recovered {} interrupted action(s)", recovered);
        }
        recovered
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
