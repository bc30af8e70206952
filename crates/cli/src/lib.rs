// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Substring search with a precomputed KMP skip table.
//!
//! The classical KMP failure function is expanded, per pattern, into a dense
//! (alphabet × pattern length) grid keyed by (observed character, pattern
//! position); the matcher then resolves every mismatch with one lookup. The
//! [`table`] module builds the grid, [`search`] consumes it, and
//! [`cmd_search`] drives both CLI modes.

pub mod cli;
pub mod cmd_search;
pub mod error;
pub mod search;
pub mod table;
