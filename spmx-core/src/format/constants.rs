//! Literal tokens of the SPMX text format

/// Prefix of the first header line
pub const ROWS_PREFIX: &str = "rows=";

/// Prefix of the second header line
pub const COLS_PREFIX: &str = "cols=";

/// Number of header lines preceding the entries
pub const HEADER_LINES: usize = 2;

/// Opening delimiter of an entry line
pub const ENTRY_OPEN: char = '(';

/// Closing delimiter of an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separator between entry fields
pub const FIELD_SEPARATOR: char = ',';

/// Number of fields in an entry: row, column, value
pub const ENTRY_FIELDS: usize = 3;
