// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for CLI argument parsing.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use clap::Parser;

use super::*;

#[test]
fn pattern_only_selects_table_mode() {
    let cli = Cli::try_parse_from(["skipgrep", "needle"]).unwrap();
    assert_eq!(cli.pattern, "needle");
    assert!(cli.path.is_none());
    assert!(!cli.verbose);
}

#[test]
fn pattern_and_file_select_search_mode() {
    let cli = Cli::try_parse_from(["skipgrep", "needle", "haystack.txt"]).unwrap();
    assert_eq!(cli.pattern, "needle");
    assert_eq!(cli.path.unwrap(), PathBuf::from("haystack.txt"));
}

#[test]
fn missing_pattern_is_a_usage_error() {
    assert!(Cli::try_parse_from(["skipgrep"]).is_err());
}

#[test]
fn empty_pattern_is_a_usage_error() {
    assert!(Cli::try_parse_from(["skipgrep", ""]).is_err());
}

#[test]
fn extra_positional_is_a_usage_error() {
    assert!(Cli::try_parse_from(["skipgrep", "a", "b.txt", "c"]).is_err());
}

#[test]
fn verbose_flag_parses() {
    let cli = Cli::try_parse_from(["skipgrep", "-v", "needle"]).unwrap();
    assert!(cli.verbose);
}
