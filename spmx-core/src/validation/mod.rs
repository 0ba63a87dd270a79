//! Token-level validation for the SPMX text format
//!
//! This module contains pure functions with no I/O dependencies: splitting
//! raw content into logical lines and checking the integer tokens that appear
//! in headers and entry triples.

pub mod lines;
pub mod parsing;

pub use lines::{split_lines, trim_spaces};
pub use parsing::{is_integer, parse_header_value, parse_strict_integer};
