// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Classification of failed attempts.

use regex::Regex;
use std::sync::LazyLock;

use crate::dispatch::DispatchError;
use crate::remote::RemoteError;

// Hard-coded patterns, exercised by the classify tests.
static SESSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"(?i)unauthori[sz]ed|forbidden|session|login|authenticat") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});
static CONFLICT_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(?i)not found|conflict|already|\bgone\b") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// How a failed attempt affects the action and the rest of the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Credentials are no longer valid. Terminal for the action and halts
    /// the pass.
    SessionExpired,
    /// Target missing or concurrently modified. Terminal for the action.
    Conflict,
    /// The dispatcher refused the action. Terminal for the action.
    Unsupported,
    /// Anything else. Retryable until the attempt limit.
    Transient,
}

impl FailureKind {
    /// Returns true if retrying cannot help.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FailureKind::Transient)
    }

    /// Returns true if the rest of the pass must be skipped.
    pub fn halts_pass(&self) -> bool {
        matches!(self, FailureKind::SessionExpired)
    }
}

/// Classify a dispatch failure.
pub fn classify(error: &DispatchError) -> FailureKind {
    match error {
        DispatchError::Remote(remote) => classify_remote(remote),
        DispatchError::Unsupported(_) => FailureKind::Unsupported,
    }
}

/// Classify a remote failure by status code and message.
///
/// Session expiry wins over conflict when both match.
fn classify_remote(error: &RemoteError) -> FailureKind {
    let status = error.status.unwrap_or(0);
    if matches!(status, 401 | 403) || SESSION_RE.is_match(&error.message) {
        FailureKind::SessionExpired
    } else if matches!(status, 404 | 409 | 410) || CONFLICT_RE.is_match(&error.message) {
        FailureKind::Conflict
    } else {
        FailureKind::Transient
    }
}
