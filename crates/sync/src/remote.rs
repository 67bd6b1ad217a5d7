// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote API abstraction.
//!
//! The concrete client (request construction, authentication, timeouts)
//! lives outside this crate. The engine only needs one call per remote
//! effect and an error it can classify.

use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

/// Failure reported by the remote API.
///
/// `status` carries an HTTP-like status code when the client has one. The
/// message is stored verbatim on the failed action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RemoteError {
    /// Status code of the failed call, if any.
    pub status: Option<u16>,
    /// Human-readable failure message.
    pub message: String,
}

impl RemoteError {
    /// Create an error without a status code (e.g. a network failure).
    pub fn new(message: impl Into<String>) -> Self {
        RemoteError {
            status: None,
            message: message.into(),
        }
    }

    /// Create an error carrying a status code.
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        RemoteError {
            status: Some(status),
            message: message.into(),
        }
    }
}

/// Result type for remote calls.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Boxed future returned by every [`RemoteApi`] call.
pub type RemoteFuture<'a> = Pin<Box<dyn Future<Output = RemoteResult<()>> + Send + 'a>>;

/// The remote calls the dispatcher can make.
///
/// Each call either resolves or fails with a [`RemoteError`]; the engine
/// never retries inside a call.
pub trait RemoteApi: Send + Sync {
    /// Set fields on a single record.
    fn update_record<'a>(&'a self, record_id: &'a str, data: &'a Value) -> RemoteFuture<'a>;

    /// Take over an exchange.
    fn take_over_exchange<'a>(&'a self, exchange_id: &'a str) -> RemoteFuture<'a>;

    /// Withdraw from an exchange.
    fn withdraw_from_exchange<'a>(&'a self, exchange_id: &'a str) -> RemoteFuture<'a>;

    /// Publish an assignment to the exchange.
    fn publish_to_exchange<'a>(&'a self, source_id: &'a str) -> RemoteFuture<'a>;
}
