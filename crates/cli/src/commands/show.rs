// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use mq_core::ActionStore;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::format_action_details;
use crate::error::{Error, Result};

pub fn run(
    store: &ActionStore,
    config: &Config,
    id: &str,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let action = store
        .get(id)
        .ok_or_else(|| Error::ActionNotFound(id.to_string()))?;

    match output {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&action)?)?,
        OutputFormat::Text => write!(out, "{}", format_action_details(&action, &config.sync))?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
