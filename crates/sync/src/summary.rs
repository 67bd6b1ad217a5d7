// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structured outcome of a sync pass.

use mq_core::ActionType;
use serde::{Deserialize, Serialize};

/// Outcome of one attempted action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
    pub action_id: String,
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub requires_reauth: bool,
}

impl ActionResult {
    pub(crate) fn succeeded(action_id: &str, action_type: ActionType) -> Self {
        ActionResult {
            action_id: action_id.to_string(),
            action_type,
            success: true,
            error: None,
            requires_reauth: false,
        }
    }

    pub(crate) fn failed(
        action_id: &str,
        action_type: ActionType,
        error: String,
        requires_reauth: bool,
    ) -> Self {
        ActionResult {
            action_id: action_id.to_string(),
            action_type,
            success: false,
            error: Some(error),
            requires_reauth,
        }
    }
}

/// Summary of a sync pass, handed to the view-state layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSummary {
    /// Actions attempted in this pass.
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// True if the pass stopped on session expiry.
    pub requires_reauth: bool,
    /// Per-action outcomes, in execution order.
    pub results: Vec<ActionResult>,
}

impl SyncSummary {
    /// Returns true if nothing was attempted.
    pub fn is_empty(&self) -> bool {
        self.processed == 0
    }

    /// Append an outcome and update the counters.
    pub(crate) fn record(&mut self, result: ActionResult) {
        self.processed += 1;
        if result.success {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        if result.requires_reauth {
            self.requires_reauth = true;
        }
        self.results.push(result);
    }
}
