//! `rows=` / `cols=` header lines

use super::constants::{COLS_PREFIX, HEADER_LINES, ROWS_PREFIX};
use crate::error::{FormatIssue, Result};
use crate::validation::parse_header_value;

/// Declared dimensions of an SPMX document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixHeader {
    pub rows: usize,
    pub cols: usize,
}

impl MatrixHeader {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Parse the header from the first two logical lines
    ///
    /// Both prefixes are checked before either value is parsed.
    pub fn from_lines(lines: &[&str]) -> Result<Self> {
        if lines.len() < HEADER_LINES {
            return Err(FormatIssue::MissingHeader { line: lines.len() }.into());
        }

        let rows_value = lines[0]
            .strip_prefix(ROWS_PREFIX)
            .ok_or(FormatIssue::MissingHeader { line: 0 })?;
        let cols_value = lines[1]
            .strip_prefix(COLS_PREFIX)
            .ok_or(FormatIssue::MissingHeader { line: 1 })?;

        let rows =
            parse_header_value(rows_value).ok_or(FormatIssue::InvalidDimension { line: 0 })?;
        let cols =
            parse_header_value(cols_value).ok_or(FormatIssue::InvalidDimension { line: 1 })?;

        Ok(Self { rows, cols })
    }
}

impl core::fmt::Display for MatrixHeader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{ROWS_PREFIX}{}", self.rows)?;
        write!(f, "{COLS_PREFIX}{}", self.cols)
    }
}
