// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};

/// Prefix shared by all action ids.
pub const ACTION_ID_PREFIX: &str = "act";

/// Process-local sequence so two identical mutations queued within the same
/// millisecond still hash differently.
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generate an action ID from the type tag, serialized payload, and creation time.
/// Format: act-{hash} where hash is the first 12 hex chars of SHA256(inputs + sequence)
pub fn generate_id(action_type: &str, payload: &str, created_at: i64) -> String {
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let input = format!("{action_type}\0{payload}\0{created_at}\0{seq}");
    let hash = Sha256::digest(input.as_bytes());
    let short_hash = hex::encode(&hash[..6]);
    format!("{ACTION_ID_PREFIX}-{short_hash}")
}

/// Generate a unique ID, handling collisions by appending incrementing suffix.
pub fn generate_unique_id<F>(action_type: &str, payload: &str, created_at: i64, exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    let base_id = generate_id(action_type, payload, created_at);

    if !exists(&base_id) {
        return base_id;
    }

    let mut suffix = 2;
    loop {
        let id = format!("{}-{}", base_id, suffix);
        if !exists(&id) {
            return id;
        }
        suffix += 1;
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
