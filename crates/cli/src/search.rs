// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Skip-table driven matcher.
//!
//! Walks text and pattern pointers in lockstep; on a mismatch the shift comes
//! from the precomputed grid instead of an inline failure-function walk.

use crate::table::SkipTable;

/// First occurrence of the table's pattern in `line`, as a 0-based character
/// offset. Pure: repeated calls against the same table and line agree, and no
/// state carries across lines.
pub fn find_first(table: &SkipTable, line: &[char]) -> Option<usize> {
    let pattern = table.pattern();
    let len = table.pattern_len();

    let mut text_index = 0;
    let mut pattern_index = 0;

    while text_index < line.len() {
        let c = line[text_index];
        if c == pattern[pattern_index] {
            text_index += 1;
            pattern_index += 1;
            if pattern_index == len {
                return Some(text_index - len);
            }
        } else if pattern_index != 0 {
            match table.row_of(c) {
                // Column `pattern_index` holds the fallback walk that starts
                // at this position: `pattern[pattern_index] != c` here, so the
                // stored walk begins exactly one failure-chain step in. The
                // restart sentinel exceeds `pattern_index`, hence saturation.
                Some(row) => {
                    pattern_index =
                        pattern_index.saturating_sub(table.shift(row, pattern_index));
                }
                // c occurs nowhere in the pattern: drop the partial match and
                // retry c against a restarted pattern.
                None => pattern_index = 0,
            }
        } else {
            text_index += 1;
        }
    }
    None
}

/// Convenience wrapper decoding `line` to scalar values first.
pub fn find_first_in_str(table: &SkipTable, line: &str) -> Option<usize> {
    let chars: Vec<char> = line.chars().collect();
    find_first(table, &chars)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
