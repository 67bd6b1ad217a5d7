// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use std::path::PathBuf;

/// Environment variable names read by the CLI.
pub mod vars {
    pub const MUTQ_LOG: &str = "MUTQ_LOG";
    pub const MUTQ_STATE_DIR: &str = "MUTQ_STATE_DIR";
    pub const XDG_STATE_HOME: &str = "XDG_STATE_HOME";
}

/// Returns the value of `MUTQ_LOG` if set.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::MUTQ_LOG).ok()
}

/// Returns the value of `MUTQ_STATE_DIR` if set.
pub fn state_dir() -> Option<PathBuf> {
    std::env::var(vars::MUTQ_STATE_DIR).ok().map(PathBuf::from)
}

/// Returns the value of `XDG_STATE_HOME` if set.
pub fn xdg_state_home() -> Option<PathBuf> {
    std::env::var(vars::XDG_STATE_HOME).ok().map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
