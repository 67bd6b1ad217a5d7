// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use mq_core::{ActionStatus, ActionStore};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::format_action_line;
use crate::error::Result;

pub fn run(
    store: &ActionStore,
    config: &Config,
    status: Option<ActionStatus>,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    // Both queries come back ordered by created_at.
    let actions = match status {
        Some(status) => store.get_by_status(status),
        None => store.get_all(),
    };

    match output {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string(&actions)?)?;
        }
        OutputFormat::Text => {
            if actions.is_empty() {
                writeln!(out, "No actions queued.")?;
            }
            for action in &actions {
                writeln!(out, "{}", format_action_line(action, &config.sync))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
