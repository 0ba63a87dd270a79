//! Line splitting for SPMX documents

use alloc::vec::Vec;

/// Trim spaces and tabs from both ends of a string
///
/// Only `' '` and `'\t'` count as padding; other whitespace is kept.
pub fn trim_spaces(s: &str) -> &str {
    s.trim_matches(|c: char| c == ' ' || c == '\t')
}

/// Split raw content into trimmed, non-empty logical lines
///
/// `\n`, `\r` and `\r\n` all terminate a line. Lines that are empty after
/// [`trim_spaces`] are dropped rather than kept as placeholders.
pub fn split_lines(content: &str) -> Vec<&str> {
    content
        .split(|c: char| c == '\n' || c == '\r')
        .map(trim_spaces)
        .filter(|line| !line.is_empty())
        .collect()
}
