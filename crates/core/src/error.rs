// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for mq-core operations.
//!
//! These errors only surface from [`Database`](crate::Database). The
//! [`ActionStore`](crate::ActionStore) converts them into sentinel values.

use thiserror::Error;

/// All possible errors that can occur in mq-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("action store unavailable")]
    StoreUnavailable,

    #[error("invalid action status: '{0}'\n  hint: valid statuses are: pending, syncing, failed")]
    InvalidStatus(String),

    #[error("invalid action type: '{0}'\n  hint: valid types are: update-record, update-record-via-parent, batch-update-records, apply-for-exchange, withdraw-from-exchange, add-to-exchange")]
    InvalidActionType(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for mq-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
