// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use mq_core::{ActionPayload, ActionStatus, ActionStore, StoreHandle};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn mutq() -> Command {
    let mut cmd = cargo_bin_cmd!("mutq");
    cmd.env_remove("MUTQ_LOG").env_remove("RUST_LOG");
    cmd
}

/// A temp directory holding a config file and its queue database.
pub struct Queue {
    pub temp: TempDir,
    pub config: PathBuf,
    pub db: PathBuf,
}

impl Queue {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.toml");
        std::fs::write(&config, "database = \"queue.db\"\n").unwrap();
        let db = temp.path().join("queue.db");
        Queue { temp, config, db }
    }

    /// `mutq --config <this queue's config>`.
    pub fn mutq(&self) -> Command {
        let mut cmd = mutq();
        cmd.arg("--config").arg(&self.config);
        cmd
    }

    fn store(&self) -> ActionStore {
        ActionStore::new(StoreHandle::try_open(&self.db).unwrap())
    }

    /// Queue an action directly in the database, returning its id.
    pub fn seed(&self, payload: ActionPayload) -> String {
        let store = self.store();
        let id = store.create(payload).unwrap().id;
        store.handle().close();
        id
    }

    /// Record one failed attempt on `id`.
    pub fn fail(&self, id: &str, error: &str) {
        let store = self.store();
        assert!(store.update_status(id, ActionStatus::Syncing, None));
        assert!(store.update_status(id, ActionStatus::Failed, Some(error)));
        store.handle().close();
    }

    /// Leave `id` marked syncing, as after a crash.
    pub fn interrupt(&self, id: &str) {
        let store = self.store();
        assert!(store.update_status(id, ActionStatus::Syncing, None));
        store.handle().close();
    }

    /// Current status of `id`, or `None` if it is gone.
    pub fn status_of(&self, id: &str) -> Option<ActionStatus> {
        let store = self.store();
        let status = store.get(id).map(|action| action.status);
        store.handle().close();
        status
    }
}

pub fn apply(exchange_id: &str) -> ActionPayload {
    ActionPayload::apply_for_exchange(exchange_id)
}
