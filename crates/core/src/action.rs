// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Action catalog for the offline mutation queue.
//!
//! Every mutation issued while offline is captured as an [`OfflineAction`]
//! carrying one of a closed set of [`ActionPayload`] variants. The lifecycle
//! is:
//!
//! ```text
//! pending ──► syncing ──► (deleted)          success
//!    ▲           │
//!    │           └──────► failed             session expiry, conflict,
//!    └─── retry ─────────────┘               transient error
//! ```
//!
//! There is no stored "synced" status: an action that is no longer in the
//! store was delivered.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Discriminator for the kind of queued mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionType {
    /// Update a single record.
    UpdateRecord,
    /// Update a record addressed through its parent. Needs a lookup that the
    /// sync engine does not perform.
    UpdateRecordViaParent,
    /// Apply the same update to several records.
    BatchUpdateRecords,
    /// Take over an exchange offer.
    ApplyForExchange,
    /// Withdraw from an exchange offer.
    WithdrawFromExchange,
    /// Publish an assignment to the exchange.
    AddToExchange,
}

impl ActionType {
    /// All action types, in declaration order.
    pub const ALL: [ActionType; 6] = [
        ActionType::UpdateRecord,
        ActionType::UpdateRecordViaParent,
        ActionType::BatchUpdateRecords,
        ActionType::ApplyForExchange,
        ActionType::WithdrawFromExchange,
        ActionType::AddToExchange,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::UpdateRecord => "update-record",
            ActionType::UpdateRecordViaParent => "update-record-via-parent",
            ActionType::BatchUpdateRecords => "batch-update-records",
            ActionType::ApplyForExchange => "apply-for-exchange",
            ActionType::WithdrawFromExchange => "withdraw-from-exchange",
            ActionType::AddToExchange => "add-to-exchange",
        }
    }

    /// The resource category whose cached views this action affects.
    pub fn category(&self) -> ResourceCategory {
        match self {
            ActionType::UpdateRecord
            | ActionType::UpdateRecordViaParent
            | ActionType::BatchUpdateRecords => ResourceCategory::Records,
            ActionType::ApplyForExchange
            | ActionType::WithdrawFromExchange
            | ActionType::AddToExchange => ResourceCategory::Exchanges,
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ActionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::InvalidActionType(s.to_string()))
    }
}

/// Coarse grouping of remote resources, used to invalidate cached views
/// after a sync pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    /// Per-record data (e.g. compensation records).
    Records,
    /// Exchange listings and applications.
    Exchanges,
}

impl ResourceCategory {
    /// Returns the string representation used in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::Records => "records",
            ResourceCategory::Exchanges => "exchanges",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Typed payload of a queued mutation, tagged by its [`ActionType`].
///
/// Serializes adjacently tagged as `{"type": "...", "payload": {...}}` so
/// the type and payload columns of the store can be split apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ActionPayload {
    /// Set fields on one record.
    UpdateRecord { record_id: String, data: Value },

    /// Set fields on the record owned by `parent_id`.
    UpdateRecordViaParent { parent_id: String, data: Value },

    /// Set the same fields on every listed record.
    BatchUpdateRecords { record_ids: Vec<String>, data: Value },

    /// Take over the given exchange.
    ApplyForExchange { exchange_id: String },

    /// Withdraw from the given exchange.
    WithdrawFromExchange { exchange_id: String },

    /// Publish the given assignment to the exchange.
    AddToExchange { source_id: String },
}

impl ActionPayload {
    /// Creates an UpdateRecord payload.
    pub fn update_record(record_id: impl Into<String>, data: Value) -> Self {
        ActionPayload::UpdateRecord {
            record_id: record_id.into(),
            data,
        }
    }

    /// Creates an UpdateRecordViaParent payload.
    pub fn update_record_via_parent(parent_id: impl Into<String>, data: Value) -> Self {
        ActionPayload::UpdateRecordViaParent {
            parent_id: parent_id.into(),
            data,
        }
    }

    /// Creates a BatchUpdateRecords payload.
    pub fn batch_update_records(record_ids: Vec<String>, data: Value) -> Self {
        ActionPayload::BatchUpdateRecords { record_ids, data }
    }

    /// Creates an ApplyForExchange payload.
    pub fn apply_for_exchange(exchange_id: impl Into<String>) -> Self {
        ActionPayload::ApplyForExchange {
            exchange_id: exchange_id.into(),
        }
    }

    /// Creates a WithdrawFromExchange payload.
    pub fn withdraw_from_exchange(exchange_id: impl Into<String>) -> Self {
        ActionPayload::WithdrawFromExchange {
            exchange_id: exchange_id.into(),
        }
    }

    /// Creates an AddToExchange payload.
    pub fn add_to_exchange(source_id: impl Into<String>) -> Self {
        ActionPayload::AddToExchange {
            source_id: source_id.into(),
        }
    }

    /// Returns the type tag of this payload.
    pub fn action_type(&self) -> ActionType {
        match self {
            ActionPayload::UpdateRecord { .. } => ActionType::UpdateRecord,
            ActionPayload::UpdateRecordViaParent { .. } => ActionType::UpdateRecordViaParent,
            ActionPayload::BatchUpdateRecords { .. } => ActionType::BatchUpdateRecords,
            ActionPayload::ApplyForExchange { .. } => ActionType::ApplyForExchange,
            ActionPayload::WithdrawFromExchange { .. } => ActionType::WithdrawFromExchange,
            ActionPayload::AddToExchange { .. } => ActionType::AddToExchange,
        }
    }

    /// Serializes only the variant body (without the type tag).
    pub fn body(&self) -> Result<Value> {
        let mut tagged = serde_json::to_value(self)?;
        tagged
            .get_mut("payload")
            .map(Value::take)
            .ok_or_else(|| Error::CorruptedData("payload serialized without body".to_string()))
    }

    /// Rebuilds a payload from a stored type tag and body.
    pub fn from_parts(action_type: ActionType, body: Value) -> Result<Self> {
        let tagged = serde_json::json!({
            "type": action_type.as_str(),
            "payload": body,
        });
        Ok(serde_json::from_value(tagged)?)
    }
}

/// Lifecycle status of a stored action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    /// Waiting for the next sync pass.
    Pending,
    /// An attempt is in flight (or was interrupted).
    Syncing,
    /// The last attempt failed; see the stored error.
    Failed,
}

impl ActionStatus {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionStatus::Pending => "pending",
            ActionStatus::Syncing => "syncing",
            ActionStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActionStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ActionStatus::Pending),
            "syncing" => Ok(ActionStatus::Syncing),
            "failed" => Ok(ActionStatus::Failed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// A queued mutation awaiting execution against the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflineAction {
    /// Unique identifier, stable for the action's lifetime.
    pub id: String,
    /// The mutation to perform.
    #[serde(flatten)]
    pub payload: ActionPayload,
    /// Creation time in milliseconds since Unix epoch. Defines queue order.
    pub created_at: i64,
    /// Current lifecycle status.
    pub status: ActionStatus,
    /// Number of attempts started so far.
    pub retry_count: u32,
    /// Message of the last failed attempt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OfflineAction {
    /// Creates a new pending action that has never been attempted.
    pub fn new(id: String, payload: ActionPayload, created_at: i64) -> Self {
        OfflineAction {
            id,
            payload,
            created_at,
            status: ActionStatus::Pending,
            retry_count: 0,
            error: None,
        }
    }

    /// Returns the type tag of this action.
    pub fn action_type(&self) -> ActionType {
        self.payload.action_type()
    }
}

/// Number of stored actions per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueCounts {
    pub pending: usize,
    pub syncing: usize,
    pub failed: usize,
}

impl QueueCounts {
    /// Total number of stored actions.
    pub fn total(&self) -> usize {
        self.pending + self.syncing + self.failed
    }

    /// Returns true if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
