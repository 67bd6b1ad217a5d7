// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration.
//!
//! Configuration is read from `--config <path>` or, by default,
//! `$XDG_CONFIG_HOME/mutq/config.toml`. Keys:
//! - `database`: path to the SQLite queue (default: `<state dir>/mutq/queue.db`)
//! - `[sync]`: retry and backoff settings shared with the sync engine

use mq_sync::SyncConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "mutq";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "queue.db";

/// Configuration stored in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the queue database. Relative paths resolve against the
    /// config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
    /// Retry and backoff settings.
    #[serde(default)]
    pub sync: SyncConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. The default location may be absent,
    /// in which case defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    /// Read and parse a config file.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let mut config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;

        if let (Some(db), Some(dir)) = (&config.database, path.parent()) {
            if db.is_relative() {
                config.database = Some(dir.join(db));
            }
        }
        Ok(config)
    }

    /// Path of the queue database.
    pub fn db_path(&self) -> PathBuf {
        match &self.database {
            Some(path) => path.clone(),
            None => default_state_dir().join(DB_FILE_NAME),
        }
    }
}

/// Default config file location, if a config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Directory holding the queue database.
///
/// Resolution order: `MUTQ_STATE_DIR`, `$XDG_STATE_HOME/mutq`, the platform
/// state or data directory, then `~/.local/state/mutq`.
pub fn default_state_dir() -> PathBuf {
    resolve_state_dir(env::state_dir(), env::xdg_state_home())
}

fn resolve_state_dir(explicit: Option<PathBuf>, xdg_state: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    if let Some(xdg) = xdg_state {
        return xdg.join(APP_DIR_NAME);
    }
    if let Some(dir) = dirs::state_dir().or_else(dirs::data_local_dir) {
        return dir.join(APP_DIR_NAME);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".local/state")
        .join(APP_DIR_NAME)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
