//! `(row, col, value)` entry lines

use super::constants::{ENTRY_CLOSE, ENTRY_FIELDS, ENTRY_OPEN, FIELD_SEPARATOR};
use crate::error::{FormatIssue, Result};
use crate::validation::{parse_strict_integer, trim_spaces};

/// One stored matrix element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub row: i64,
    pub col: i64,
    pub value: i64,
}

impl Entry {
    pub const fn new(row: i64, col: i64, value: i64) -> Self {
        Self { row, col, value }
    }

    /// Parse an already trimmed entry line
    ///
    /// `line` is the position of the line in the document and is only used
    /// to annotate the error.
    pub fn parse(text: &str, line: usize) -> Result<Self> {
        let inner = text
            .strip_prefix(ENTRY_OPEN)
            .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
            .ok_or(FormatIssue::UnbalancedParentheses { line })?;

        let mut parts = [""; ENTRY_FIELDS];
        let mut found = 0;
        for part in inner.split(FIELD_SEPARATOR) {
            if let Some(slot) = parts.get_mut(found) {
                *slot = trim_spaces(part);
            }
            found += 1;
        }
        if found != ENTRY_FIELDS {
            return Err(FormatIssue::FieldCount { line, found }.into());
        }

        let mut fields = [0i64; ENTRY_FIELDS];
        for (field, (slot, part)) in fields.iter_mut().zip(parts).enumerate() {
            *slot = parse_strict_integer(part).ok_or(FormatIssue::InvalidInteger { line, field })?;
        }

        let [row, col, value] = fields;
        Ok(Self { row, col, value })
    }
}

impl core::fmt::Display for Entry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn issue(text: &str) -> Option<FormatIssue> {
        Entry::parse(text, 2).err().and_then(|e| e.format_issue())
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(Entry::parse("(0, 1, -3)", 2), Ok(Entry::new(0, 1, -3)));
        assert_eq!(Entry::parse("(0,1,3)", 2), Ok(Entry::new(0, 1, 3)));
        assert_eq!(Entry::parse("( +4 ,\t5 , 0 )", 2), Ok(Entry::new(4, 5, 0)));
        assert_eq!(Entry::parse("(-1, -2, 9)", 2), Ok(Entry::new(-1, -2, 9)));
    }

    #[test]
    fn test_parentheses_required() {
        assert_eq!(issue("0, 1, 3"), Some(FormatIssue::UnbalancedParentheses { line: 2 }));
        assert_eq!(issue("(0, 1, 3"), Some(FormatIssue::UnbalancedParentheses { line: 2 }));
        assert_eq!(issue("0, 1, 3)"), Some(FormatIssue::UnbalancedParentheses { line: 2 }));
        assert_eq!(issue("("), Some(FormatIssue::UnbalancedParentheses { line: 2 }));
        assert_eq!(issue("[0, 1, 3]"), Some(FormatIssue::UnbalancedParentheses { line: 2 }));
    }

    #[test]
    fn test_field_count() {
        assert_eq!(issue("(1, 2)"), Some(FormatIssue::FieldCount { line: 2, found: 2 }));
        assert_eq!(issue("(1, 2, 3, 4)"), Some(FormatIssue::FieldCount { line: 2, found: 4 }));
        assert_eq!(issue("()"), Some(FormatIssue::FieldCount { line: 2, found: 1 }));
        // Count is checked before the fields are parsed
        assert_eq!(issue("(x, y)"), Some(FormatIssue::FieldCount { line: 2, found: 2 }));
    }

    #[test]
    fn test_invalid_integer() {
        assert_eq!(issue("(a, 1, 2)"), Some(FormatIssue::InvalidInteger { line: 2, field: 0 }));
        assert_eq!(issue("(0, 1.5, 2)"), Some(FormatIssue::InvalidInteger { line: 2, field: 1 }));
        assert_eq!(issue("(0, 1, )"), Some(FormatIssue::InvalidInteger { line: 2, field: 2 }));
        assert_eq!(issue("(0, 1, -)"), Some(FormatIssue::InvalidInteger { line: 2, field: 2 }));
        assert_eq!(
            issue("(0, 1, 99999999999999999999)"),
            Some(FormatIssue::InvalidInteger { line: 2, field: 2 })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Entry::new(0, 1, -3).to_string(), "(0, 1, -3)");
    }
}
