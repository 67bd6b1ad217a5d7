// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::DateTime;
use mq_core::{ActionStatus, OfflineAction, QueueCounts};
use mq_sync::SyncConfig;

/// Format a millisecond timestamp as UTC, or the raw number if out of range.
pub fn format_timestamp(ms: i64) -> String {
    match DateTime::from_timestamp_millis(ms) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => ms.to_string(),
    }
}

/// Returns true if automatic retries have given up on `action`.
pub fn is_exhausted(action: &OfflineAction, config: &SyncConfig) -> bool {
    action.status == ActionStatus::Failed && action.retry_count >= config.max_retry_count
}

/// Format a single action line for list output
pub fn format_action_line(action: &OfflineAction, config: &SyncConfig) -> String {
    let status = if is_exhausted(action, config) {
        format!("{}, gave up", action.status)
    } else {
        action.status.to_string()
    };
    let mut line = format!(
        "- [{}] ({}) {} {}",
        action.action_type(),
        status,
        action.id,
        format_timestamp(action.created_at)
    );
    if let Some(error) = &action.error {
        line.push_str(&format!(": {error}"));
    }
    line
}

/// Format action details for the show command
pub fn format_action_details(action: &OfflineAction, config: &SyncConfig) -> String {
    let mut output = Vec::new();

    output.push(format!("[{}] {}", action.action_type(), action.id));
    output.push(format!("Status: {}", action.status));
    output.push(format!("Created: {}", format_timestamp(action.created_at)));
    output.push(format!("Attempts: {}", action.retry_count));

    match action.status {
        ActionStatus::Pending if action.retry_count > 0 => {
            let delay = config.backoff_delay(action.retry_count);
            output.push(format!("Next attempt: {}s after sync starts", delay.as_secs()));
        }
        ActionStatus::Failed if is_exhausted(action, config) => {
            output.push("Retries: exhausted (use 'mutq retry' to requeue)".to_string());
        }
        _ => {}
    }

    if let Some(error) = &action.error {
        output.push(format!("Error: {error}"));
    }

    match action.payload.body() {
        Ok(body) => {
            output.push(String::new());
            output.push("Payload:".to_string());
            let pretty = serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string());
            for line in pretty.lines() {
                output.push(format!("    {line}"));
            }
        }
        Err(e) => output.push(format!("Payload: <unreadable: {e}>")),
    }

    output.join("\n") + "\n"
}

/// Format queue counts for the status command
pub fn format_counts(counts: &QueueCounts) -> String {
    if counts.is_empty() {
        return "Queue is empty.\n".to_string();
    }
    format!(
        "pending: {}\nsyncing: {}\nfailed:  {}\n",
        counts.pending, counts.syncing, counts.failed
    )
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
