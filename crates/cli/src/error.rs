// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the mqrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("action not found: {0}")]
    ActionNotFound(String),

    #[error("action {id} is {status}, not failed\n  hint: only failed actions can be retried")]
    NotRetryable { id: String, status: String },

    #[error("queue storage is unavailable\n  hint: check the 'database' path in your config")]
    StoreUnavailable,

    #[error("some operations failed: {succeeded} succeeded, {failed} failed")]
    PartialBulkFailure { succeeded: usize, failed: usize },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] mq_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
