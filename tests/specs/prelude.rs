// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;
use std::process::Command;

pub use assert_cmd::prelude::*;
pub use predicates;

/// Returns a Command configured to run the skipgrep binary.
pub fn skipgrep_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("skipgrep"))
}

/// Write `content` to a fresh temp file and return its guard.
pub fn text_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
