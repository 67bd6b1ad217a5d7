// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed database for queued actions.
//!
//! The [`Database`] struct provides raw, fallible data access. Callers that
//! must keep working when storage is unavailable go through
//! [`ActionStore`](crate::ActionStore) instead.

use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

use crate::action::{ActionPayload, ActionStatus, ActionType, OfflineAction, QueueCounts};
use crate::error::{Error, Result};

/// SQL schema for the offline action queue.
pub const SCHEMA: &str = r#"
-- One row per queued action; success deletes the row
CREATE TABLE IF NOT EXISTS offline_actions (
    id TEXT PRIMARY KEY,
    type TEXT NOT NULL,
    payload TEXT NOT NULL,
    created_at INTEGER NOT NULL,
    status TEXT NOT NULL DEFAULT 'pending',
    retry_count INTEGER NOT NULL DEFAULT 0,
    error TEXT,
    CHECK (status IN ('pending', 'syncing', 'failed')),
    CHECK (retry_count >= 0)
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_offline_actions_status ON offline_actions(status);
CREATE INDEX IF NOT EXISTS idx_offline_actions_created ON offline_actions(created_at);
"#;

const SELECT_COLUMNS: &str = "SELECT id, type, payload, created_at, status, retry_count, error
     FROM offline_actions";

/// Build a conversion error carrying a [`Error::CorruptedData`] message.
fn corrupted(message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(Error::CorruptedData(message)),
    )
}

/// Message for a row that failed to decode, without rusqlite's wrapper text.
fn decode_failure(error: &rusqlite::Error) -> String {
    match error {
        rusqlite::Error::FromSqlConversionFailure(_, _, inner) => inner.to_string(),
        other => other.to_string(),
    }
}

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value
        .parse()
        .map_err(|_| corrupted(format!("invalid value '{value}' in column '{column}'")))
}

/// Map a row selected with [`SELECT_COLUMNS`] to an action.
fn row_to_action(row: &Row<'_>) -> std::result::Result<OfflineAction, rusqlite::Error> {
    let id: String = row.get(0)?;
    let type_str: String = row.get(1)?;
    let payload_str: String = row.get(2)?;
    let status_str: String = row.get(4)?;

    let action_type: ActionType = parse_db(&type_str, "type")?;
    let payload = serde_json::from_str::<serde_json::Value>(&payload_str)
        .map_err(|e| corrupted(format!("invalid payload for action '{id}': {e}")))
        .and_then(|body| {
            ActionPayload::from_parts(action_type, body)
                .map_err(|e| corrupted(format!("invalid payload for action '{id}': {e}")))
        })?;

    Ok(OfflineAction {
        id,
        payload,
        created_at: row.get(3)?,
        status: parse_db(&status_str, "status")?,
        retry_count: row.get(5)?,
        error: row.get(6)?,
    })
}

/// Run schema creation on a database connection.
///
/// Idempotent, so it is safe to call on every open.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// SQLite database connection with action queue operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // WAL lets the CLI read while a sync pass writes
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Insert a new action.
    pub fn insert_action(&self, action: &OfflineAction) -> Result<()> {
        let body = serde_json::to_string(&action.payload.body()?)?;
        self.conn.execute(
            "INSERT INTO offline_actions (id, type, payload, created_at, status, retry_count, error)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                action.id,
                action.action_type().as_str(),
                body,
                action.created_at,
                action.status.as_str(),
                action.retry_count,
                action.error,
            ],
        )?;
        Ok(())
    }

    /// Check if an action exists.
    pub fn action_exists(&self, id: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM offline_actions WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Get an action by ID.
    pub fn get_action(&self, id: &str) -> Result<Option<OfflineAction>> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");
        let action = self
            .conn
            .query_row(&sql, params![id], row_to_action)
            .optional()?;
        Ok(action)
    }

    /// List actions with the given status, oldest first.
    ///
    /// Undecodable rows are skipped and quarantined, see [`Self::quarantine`].
    pub fn list_by_status(&self, status: ActionStatus) -> Result<Vec<OfflineAction>> {
        let sql = format!("{SELECT_COLUMNS} WHERE status = ?1 ORDER BY created_at, rowid");
        self.list_decodable(&sql, params![status.as_str()])
    }

    /// List every stored action, oldest first.
    ///
    /// Undecodable rows are skipped and quarantined, see [`Self::quarantine`].
    pub fn list_all(&self) -> Result<Vec<OfflineAction>> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY created_at, rowid");
        self.list_decodable(&sql, [])
    }

    fn list_decodable(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<OfflineAction>> {
        let mut actions = Vec::new();
        let mut corrupt = Vec::new();
        {
            let mut stmt = self.conn.prepare(sql)?;
            let rows = stmt.query_map(params, |row| {
                Ok((row.get::<_, String>(0)?, row_to_action(row)))
            })?;
            for row in rows {
                let (id, decoded) = row?;
                match decoded {
                    Ok(action) => actions.push(action),
                    Err(e) => {
                        let reason = decode_failure(&e);
                        tracing::warn!(%id, "skipping undecodable action: {reason}");
                        corrupt.push((id, reason));
                    }
                }
            }
        }
        for (id, reason) in corrupt {
            if let Err(e) = self.quarantine(&id, &reason) {
                tracing::warn!(%id, "could not quarantine undecodable action: {e}");
            }
        }
        Ok(actions)
    }

    /// Park an undecodable action as `failed` so it stops blocking the
    /// queue and an operator can dismiss it.
    pub fn quarantine(&self, id: &str, reason: &str) -> Result<bool> {
        let affected = self.conn.execute(
            "UPDATE offline_actions SET status = 'failed', error = ?2
             WHERE id = ?1 AND status != 'failed'",
            params![id, format!("corrupted: {reason}")],
        )?;
        Ok(affected > 0)
    }

    /// Set an action's status.
    ///
    /// Increments `retry_count` only when the new status is `syncing`. A
    /// `None` error keeps the previously stored message. Returns false if
    /// the action does not exist.
    pub fn update_status(&self, id: &str, status: ActionStatus, error: Option<&str>) -> Result<bool> {
        let affected = self.conn.execute(
            "UPDATE offline_actions
             SET status = ?1,
                 retry_count = retry_count + CASE WHEN ?1 = 'syncing' THEN 1 ELSE 0 END,
                 error = COALESCE(?2, error)
             WHERE id = ?3",
            params![status.as_str(), error, id],
        )?;
        Ok(affected > 0)
    }

    /// Move a single action from `from` to `to` without touching its
    /// retry count or error. Returns false if the action is absent or not
    /// in `from`.
    pub fn transition(&self, id: &str, from: ActionStatus, to: ActionStatus) -> Result<bool> {
        let affected = self.conn.execute(
            "UPDATE offline_actions SET status = ?1 WHERE id = ?2 AND status = ?3",
            params![to.as_str(), id, from.as_str()],
        )?;
        Ok(affected > 0)
    }

    /// Move every action in `from` to `to`. Returns the number moved.
    pub fn transition_all(&self, from: ActionStatus, to: ActionStatus) -> Result<usize> {
        let affected = self.conn.execute(
            "UPDATE offline_actions SET status = ?1 WHERE status = ?2",
            params![to.as_str(), from.as_str()],
        )?;
        Ok(affected)
    }

    /// Delete an action. Returns false if it did not exist.
    pub fn delete_action(&self, id: &str) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM offline_actions WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    /// Delete every action. Returns the number removed.
    pub fn clear(&self) -> Result<usize> {
        let affected = self.conn.execute("DELETE FROM offline_actions", [])?;
        Ok(affected)
    }

    /// Count actions per status.
    pub fn count_by_status(&self) -> Result<QueueCounts> {
        let mut stmt = self
            .conn
            .prepare("SELECT status, COUNT(*) FROM offline_actions GROUP BY status")?;
        let rows = stmt.query_map([], |row| {
            let status: String = row.get(0)?;
            let count: i64 = row.get(1)?;
            Ok((status, count))
        })?;

        let mut counts = QueueCounts::default();
        for row in rows {
            let (status, count) = row?;
            let count = usize::try_from(count).unwrap_or(0);
            match parse_db::<ActionStatus>(&status, "status")? {
                ActionStatus::Pending => counts.pending = count,
                ActionStatus::Syncing => counts.syncing = count,
                ActionStatus::Failed => counts.failed = count,
            }
        }
        Ok(counts)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
