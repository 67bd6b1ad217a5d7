// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use mq_core::ActionStore;

use crate::cli::OutputFormat;
use crate::display::format_counts;
use crate::error::Result;

pub fn run(store: &ActionStore, output: OutputFormat, out: &mut impl Write) -> Result<()> {
    let counts = store.counts();
    match output {
        OutputFormat::Text => write!(out, "{}", format_counts(&counts))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&counts)?)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
