//! Decoding and encoding of whole SPMX documents

use alloc::string::String;

use super::constants::HEADER_LINES;
use super::entry::Entry;
use super::header::MatrixHeader;
use crate::error::{Result, SpmxError};
use crate::matrix::SparseMatrix;
use crate::traits::MatrixAccess;
use crate::validation::split_lines;

/// Decode a matrix from raw document text
pub fn decode(content: &str) -> Result<SparseMatrix> {
    decode_lines(&split_lines(content))
}

/// Decode a matrix from trimmed, non-empty logical lines
///
/// Entry values of zero are accepted and normalized away. Entry indices are
/// not checked against the declared dimensions.
pub fn decode_lines(lines: &[&str]) -> Result<SparseMatrix> {
    let header = MatrixHeader::from_lines(lines)?;
    let mut matrix = SparseMatrix::new(header.rows, header.cols);

    for (line, text) in lines.iter().enumerate().skip(HEADER_LINES) {
        let entry = Entry::parse(text, line)?;
        matrix.set_element(entry.row, entry.col, entry.value);
    }

    Ok(matrix)
}

/// Write a matrix in document form
///
/// Every line, including the last, is terminated with `\n`.
pub fn write_matrix<W, M>(out: &mut W, matrix: &M) -> core::fmt::Result
where
    W: core::fmt::Write + ?Sized,
    M: MatrixAccess + ?Sized,
{
    let (rows, cols) = matrix.dimensions();
    writeln!(out, "{}", MatrixHeader::new(rows, cols))?;
    for entry in matrix.entries() {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}

/// Encode a matrix as document text
pub fn encode<M: MatrixAccess + ?Sized>(matrix: &M) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_matrix(&mut out, matrix);
    out
}

impl core::fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write_matrix(f, self)
    }
}

impl core::str::FromStr for SparseMatrix {
    type Err = SpmxError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}
