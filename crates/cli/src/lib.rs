// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mqrs - Operator tooling for the offline mutation queue.
//!
//! This crate provides the functionality behind the `mutq` CLI, which
//! inspects and edits the SQLite queue that the sync engine drains. It never
//! contacts the remote API; syncing is the app's job.
//!
//! # Main Components
//!
//! - [`Config`] - Database location and `[sync]` retry settings
//! - [`Cli`] / [`Command`] - Argument parsing
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use mqrs::{Config, commands::open_store};
//!
//! let config = Config::load(None)?;
//! let store = open_store(&config)?;
//! println!("{} queued", store.counts().total());
//! ```

mod cli;
pub mod commands;
mod display;
pub mod env;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use std::io::Write;

use mq_core::ActionStore;

/// Execute a parsed CLI invocation against the configured queue.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let store = commands::open_store(&config)?;
    let mut stdout = std::io::stdout().lock();
    execute(&store, &config, cli.command, &mut stdout)
}

/// Execute a command against an open store. This is the testable core of
/// [`run`], free of config discovery and process I/O.
pub fn execute(
    store: &ActionStore,
    config: &Config,
    command: Command,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Status { output } => commands::status::run(store, output, out),
        Command::List { status, output } => commands::list::run(store, config, status, output, out),
        Command::Show { id, output } => commands::show::run(store, config, &id, output, out),
        Command::Retry { ids, all } => commands::queue::retry(store, &ids, all, out),
        Command::Dismiss { ids } => commands::queue::dismiss(store, &ids, out),
        Command::Recover => commands::queue::recover(store, out),
        Command::Clear => commands::queue::clear(store, out),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
