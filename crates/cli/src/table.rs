// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Skip table construction.
//!
//! Precomputes, for every (pattern character, pattern position) pair, how far
//! the pattern pointer falls back on a mismatch. This replaces the live
//! failure-function walk of classical KMP with a single grid lookup, trading
//! O(k·L) memory for a branch-free shift during the scan.

use std::fmt;

/// Pattern rejected before any table construction.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PatternError {
    /// The empty pattern has no alphabet and no sensible table.
    #[error("pattern must not be empty")]
    Empty,
}

/// Dense (alphabet × pattern length) shift grid plus the structures needed
/// to query it. Built once per pattern, read-only afterwards.
#[derive(Debug)]
pub struct SkipTable {
    pattern: Vec<char>,
    /// Distinct pattern characters in ascending order. Rank = grid row.
    alphabet: Vec<char>,
    /// `grid[row][i]`: pointer fallback for a mismatch of the row's character
    /// at pattern position `i`. A successful fallback walk yields a value in
    /// `[0, i]`; `i + 1` is the restart sentinel (saturated to 0 by the
    /// matcher).
    grid: Vec<Vec<usize>>,
}

/// Classical KMP failure function: `lps[i]` is the length of the longest
/// proper prefix of `pattern[..=i]` that is also a suffix of it.
pub fn build_lps(pattern: &[char]) -> Vec<usize> {
    let mut lps = vec![0; pattern.len()];
    let mut prefix_len = 0;

    let mut suffix_cursor = 1;
    while suffix_cursor < pattern.len() {
        if pattern[suffix_cursor] == pattern[prefix_len] {
            prefix_len += 1;
            lps[suffix_cursor] = prefix_len;
            suffix_cursor += 1;
        } else if prefix_len != 0 {
            // Retry against the next-shorter border; cursor stays put.
            prefix_len = lps[prefix_len - 1];
        } else {
            lps[suffix_cursor] = 0;
            suffix_cursor += 1;
        }
    }
    lps
}

impl SkipTable {
    /// Build the table for `pattern`. Operates on Unicode scalar values; the
    /// same unit is used for line comparison and column reporting.
    pub fn build(pattern: &str) -> Result<Self, PatternError> {
        let pattern: Vec<char> = pattern.chars().collect();
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }

        let mut alphabet = pattern.clone();
        alphabet.sort_unstable();
        alphabet.dedup();

        let lps = build_lps(&pattern);

        let mut grid = vec![vec![0; pattern.len()]; alphabet.len()];
        for (row, &c) in alphabet.iter().enumerate() {
            for i in 0..pattern.len() {
                // Walk the failure chain from position i until c can extend
                // the retained prefix.
                let mut cand = i;
                while cand > 0 && pattern[cand] != c {
                    cand = lps[cand - 1];
                }
                grid[row][i] = if pattern[cand] == c {
                    i - cand
                } else {
                    i + 1 // restart: c extends no prefix at all
                };
            }
        }

        tracing::debug!(
            pattern_len = pattern.len(),
            alphabet_len = alphabet.len(),
            "skip table built"
        );

        Ok(Self {
            pattern,
            alphabet,
            grid,
        })
    }

    /// The pattern as the sequence of units the matcher compares against.
    pub fn pattern(&self) -> &[char] {
        &self.pattern
    }

    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// Distinct pattern characters in ascending order.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Grid row for `c`, or `None` when `c` does not occur in the pattern.
    pub fn row_of(&self, c: char) -> Option<usize> {
        self.alphabet.binary_search(&c).ok()
    }

    /// Pointer fallback for a mismatch of the row's character at `pos`.
    pub fn shift(&self, row: usize, pos: usize) -> usize {
        self.grid[row][pos]
    }
}

/// Fixed tabular rendering: header row of pattern characters, one row per
/// alphabet character in ascending order, and a catch-all `*` row holding the
/// restart shifts `1..=L` for characters outside the alphabet. Byte-exact:
/// comma separated, no trailing comma, one newline per row.
impl fmt::Display for SkipTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*")?;
        for c in &self.pattern {
            write!(f, ",{c}")?;
        }
        writeln!(f)?;

        for (row, c) in self.alphabet.iter().enumerate() {
            write!(f, "{c}")?;
            for shift in &self.grid[row] {
                write!(f, ",{shift}")?;
            }
            writeln!(f)?;
        }

        write!(f, "*")?;
        for i in 1..=self.pattern.len() {
            write!(f, ",{i}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
