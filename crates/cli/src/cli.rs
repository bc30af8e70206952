// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

/// Line-oriented substring search driven by a precomputed KMP skip table
///
/// With only a pattern, prints the pattern's skip table. With a pattern and a
/// file, prints every line of the file containing the pattern, prefixed with
/// the 1-based column of the first match.
#[derive(Parser)]
#[command(name = "skipgrep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Pattern to search for (must not be empty)
    #[arg(value_name = "PATTERN", value_parser = NonEmptyStringValueParser::new())]
    pub pattern: String,

    /// File to search; omit to print the skip table instead
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
