// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commands that change queue state: retry, dismiss, recover, clear.

use std::io::Write;

use mq_core::ActionStore;

use crate::error::{Error, Result};

use super::for_each_id;

/// Requeue failed actions. With `all`, every failed action is requeued.
pub fn retry(store: &ActionStore, ids: &[String], all: bool, out: &mut impl Write) -> Result<()> {
    if all {
        let count = store.retry_all_failed();
        writeln!(out, "Requeued {count} failed action(s)")?;
        return Ok(());
    }
    for_each_id(ids, out, |id| retry_single(store, id))
}

fn retry_single(store: &ActionStore, id: &str) -> Result<String> {
    if store.retry(id) {
        return Ok(format!("Requeued {id}"));
    }
    match store.get(id) {
        Some(action) => Err(Error::NotRetryable {
            id: id.to_string(),
            status: action.status.to_string(),
        }),
        None => Err(Error::ActionNotFound(id.to_string())),
    }
}

/// Remove actions without syncing them.
pub fn dismiss(store: &ActionStore, ids: &[String], out: &mut impl Write) -> Result<()> {
    for_each_id(ids, out, |id| {
        if store.delete(id) {
            Ok(format!("Dismissed {id}"))
        } else {
            Err(Error::ActionNotFound(id.to_string()))
        }
    })
}

/// Requeue actions left `syncing` by an interrupted pass.
pub fn recover(store: &ActionStore, out: &mut impl Write) -> Result<()> {
    let count = store.recover_interrupted();
    writeln!(out, "Recovered {count} interrupted action(s)")?;
    Ok(())
}

/// Remove every queued action.
pub fn clear(store: &ActionStore, out: &mut impl Write) -> Result<()> {
    let count = store.counts().total();
    if !store.clear() {
        return Err(Error::StoreUnavailable);
    }
    writeln!(out, "Cleared {count} action(s)")?;
    Ok(())
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
