// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod list;
pub mod queue;
pub mod show;
pub mod status;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::io::Write;

use mq_core::{ActionStore, StoreHandle};

use crate::config::Config;
use crate::error::{Error, Result};

/// Open the queue database named by `config`.
///
/// Unlike the app, the CLI refuses to run against degraded storage.
pub fn open_store(config: &Config) -> Result<ActionStore> {
    let path = config.db_path();
    tracing::debug!("opening queue at {}", path.display());
    let handle = StoreHandle::try_open(&path)?;
    Ok(ActionStore::new(handle))
}

/// Apply `op` to each id, reporting successes on `out`.
///
/// A single id propagates its error unchanged. With several ids, failures
/// are reported on stderr and summarized as [`Error::PartialBulkFailure`].
pub(crate) fn for_each_id<F>(ids: &[String], out: &mut impl Write, mut op: F) -> Result<()>
where
    F: FnMut(&str) -> Result<String>,
{
    if let [id] = ids {
        let message = op(id)?;
        writeln!(out, "{message}")?;
        return Ok(());
    }

    let mut succeeded = 0;
    let mut failed = 0;
    for id in ids {
        match op(id) {
            Ok(message) => {
                writeln!(out, "{message}")?;
                succeeded += 1;
            }
            Err(e) => {
                eprintln!("error: {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(Error::PartialBulkFailure { succeeded, failed });
    }
    Ok(())
}
