// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command driver: table mode and line-by-line search mode.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use anyhow::Context;

use crate::cli::Cli;
use crate::error::ExitCode;
use crate::search;
use crate::table::SkipTable;

/// Run skipgrep with parsed arguments.
pub fn run(args: &Cli) -> anyhow::Result<ExitCode> {
    let table = SkipTable::build(&args.pattern)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &args.path {
        None => {
            write!(out, "{table}").context("failed to write skip table")?;
        }
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            search_lines(&table, BufReader::new(file), &mut out)
                .with_context(|| format!("failed reading {}", path.display()))?;
        }
    }
    Ok(ExitCode::Success)
}

/// Stream `reader` line by line, writing `"<1-based column> <line>"` for each
/// line containing the pattern. Lines are decoded and discarded one at a
/// time; matching state never carries across lines. A read failure stops the
/// scan; matches already written stay written.
fn search_lines(
    table: &SkipTable,
    reader: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if let Some(index) = search::find_first_in_str(table, &line) {
            writeln!(out, "{} {}", index + 1, line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "cmd_search_tests.rs"]
mod tests;
