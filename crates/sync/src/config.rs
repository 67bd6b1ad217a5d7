// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Retry and backoff settings for the sync engine.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the sync engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Attempts after which a transiently failing action is marked
    /// permanently failed (default: 3).
    #[serde(default = "default_max_retry_count")]
    pub max_retry_count: u32,
    /// Delay before the second attempt, in milliseconds. Each further
    /// attempt doubles it (default: 2000).
    #[serde(default = "default_retry_delay_base_ms")]
    pub retry_delay_base_ms: u64,
}

fn default_max_retry_count() -> u32 {
    3
}

fn default_retry_delay_base_ms() -> u64 {
    2000
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            max_retry_count: default_max_retry_count(),
            retry_delay_base_ms: default_retry_delay_base_ms(),
        }
    }
}

impl SyncConfig {
    /// Delay to wait before attempting an action that has already been
    /// attempted `retry_count` times.
    ///
    /// `base * 2^(retry_count - 1)`, zero for a first attempt, saturating
    /// instead of overflowing.
    pub fn backoff_delay(&self, retry_count: u32) -> Duration {
        if retry_count == 0 {
            return Duration::ZERO;
        }
        let factor = 2u64.checked_pow(retry_count - 1).unwrap_or(u64::MAX);
        Duration::from_millis(self.retry_delay_base_ms.saturating_mul(factor))
    }
}
