//! Integer token parsing for SPMX headers and entries
//!
//! Header values and entry fields are parsed by different rules. Entry
//! fields must pass the strict [`is_integer`] check, while header values only
//! need to start with a number.

/// Check that a string is a signed decimal integer literal
///
/// Accepts an optional leading `+` or `-` followed by one or more ASCII
/// digits. A lone sign is rejected.
pub fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parse an entry field with the strict integer rules
///
/// Returns `None` when the token fails [`is_integer`] or does not fit
/// in an `i64`.
pub fn parse_strict_integer(s: &str) -> Option<i64> {
    if !is_integer(s) {
        return None;
    }
    s.parse().ok()
}

/// Parse the value part of a `rows=` or `cols=` header
///
/// Leading whitespace is skipped, then an optional sign and the longest run
/// of ASCII digits are read. Anything after the digits is ignored, so `3x`
/// reads as 3 and `2.5` as 2. At least one digit is required, and a
/// dimension can never be negative.
pub fn parse_header_value(s: &str) -> Option<usize> {
    let s = s.trim_start();
    let unsigned = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let number = s.get(..s.len() - unsigned.len() + digits)?;
    let value: i64 = number.parse().ok()?;
    usize::try_from(value).ok()
}
