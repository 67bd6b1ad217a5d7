// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mq_core::ActionStatus;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const QUICKSTART_HELP: &str = "\
Examples:
  mutq status                 Show queue counts
  mutq list -s failed         List failed actions
  mutq show <id>              Show one action
  mutq retry --all            Requeue every failed action
  mutq dismiss <id>           Drop an action without syncing it";

#[derive(Parser)]
#[command(name = "mutq", version)]
#[command(about = "Inspect and manage the offline mutation queue")]
#[command(
    long_about = "Inspect and manage the offline mutation queue.\n\n\
    Actions queued while offline are replayed by the sync engine once the app \
    is back online. This tool reads and edits the local queue; it never talks \
    to the remote API."
)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Path to the config file (default: $XDG_CONFIG_HOME/mutq/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show pending, syncing, and failed counts
    Status {
        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// List queued actions, oldest first
    List {
        /// Only show actions with this status (pending, syncing, failed)
        #[arg(long, short)]
        status: Option<ActionStatus>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Show one action in detail
    Show {
        /// Action ID
        id: String,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Requeue failed action(s) for the next sync pass
    #[command(after_help = "Examples:\n  \
        mutq retry act-1a2b3c4d5e6f     Requeue one action\n  \
        mutq retry --all                Requeue every failed action")]
    Retry {
        /// Action ID(s)
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        ids: Vec<String>,

        /// Requeue every failed action
        #[arg(long)]
        all: bool,
    },

    /// Remove action(s) from the queue without syncing them
    Dismiss {
        /// Action ID(s)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Requeue actions left syncing by an interrupted pass
    ///
    /// Only run this while no app is syncing the queue. The app guards
    /// against overlapping passes within its own process only, so a live
    /// attempt reset here can be sent to the remote API a second time.
    Recover,

    /// Remove every queued action
    Clear,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
