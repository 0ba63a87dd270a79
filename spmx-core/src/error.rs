//! Error types for SPMX operations

use crate::ops::Operation;

/// Errors that can occur while decoding or combining sparse matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmxError {
    /// The matrix text does not follow the file grammar.
    ///
    /// Every decode failure maps to this one variant; the carried
    /// [`FormatIssue`] is for diagnostics only and never changes the message.
    WrongFormat(FormatIssue),
    /// Operand dimensions are incompatible for the operation
    DimensionMismatch(Operation),
    /// An intermediate value left the `i64` range
    Overflow(Operation),
}

impl SpmxError {
    /// Get the error category for this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SpmxError::WrongFormat(_) => ErrorCategory::Format,
            SpmxError::DimensionMismatch(_) => ErrorCategory::Dimension,
            SpmxError::Overflow(_) => ErrorCategory::Arithmetic,
        }
    }

    /// The detailed decode issue, if this is a format error
    pub const fn format_issue(&self) -> Option<FormatIssue> {
        match self {
            SpmxError::WrongFormat(issue) => Some(*issue),
            _ => None,
        }
    }
}

impl core::fmt::Display for SpmxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmxError::WrongFormat(_) => write!(f, "Input file has wrong format"),
            SpmxError::DimensionMismatch(op) => {
                write!(f, "Matrix dimensions do not match for {op}")
            }
            SpmxError::Overflow(op) => write!(f, "Integer overflow during {op}"),
        }
    }
}

impl core::error::Error for SpmxError {}

/// Broad classification of [`SpmxError`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Textual grammar violations
    Format,
    /// Incompatible operand shapes
    Dimension,
    /// Integer range violations
    Arithmetic,
}

/// Which rule of the file grammar a decode attempt broke
///
/// Line numbers are 0-based positions in the sequence of non-blank lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// Fewer than two lines, or a header line without its `rows=`/`cols=` prefix
    MissingHeader { line: usize },
    /// Header value is not a non-negative integer
    InvalidDimension { line: usize },
    /// Entry line is not wrapped in `(` and `)`
    UnbalancedParentheses { line: usize },
    /// Entry line does not hold exactly three comma separated fields
    FieldCount { line: usize, found: usize },
    /// Entry field is not a signed decimal integer that fits in `i64`
    InvalidInteger { line: usize, field: usize },
}

impl FormatIssue {
    /// Line the issue was detected on
    pub const fn line(&self) -> usize {
        match *self {
            FormatIssue::MissingHeader { line }
            | FormatIssue::InvalidDimension { line }
            | FormatIssue::UnbalancedParentheses { line }
            | FormatIssue::FieldCount { line, .. }
            | FormatIssue::InvalidInteger { line, .. } => line,
        }
    }
}

impl core::fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatIssue::MissingHeader { line } => {
                write!(f, "line {line}: expected `rows=` / `cols=` header")
            }
            FormatIssue::InvalidDimension { line } => {
                write!(f, "line {line}: dimension is not a non-negative integer")
            }
            FormatIssue::UnbalancedParentheses { line } => {
                write!(f, "line {line}: entry must be wrapped in parentheses")
            }
            FormatIssue::FieldCount { line, found } => {
                write!(f, "line {line}: expected 3 fields, found {found}")
            }
            FormatIssue::InvalidInteger { line, field } => {
                write!(f, "line {line}: field {field} is not an integer")
            }
        }
    }
}

impl From<FormatIssue> for SpmxError {
    fn from(issue: FormatIssue) -> Self {
        SpmxError::WrongFormat(issue)
    }
}

/// Result type for SPMX operations
pub type Result<T> = core::result::Result<T, SpmxError>;
