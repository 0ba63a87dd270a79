//! Structured snapshot of a matrix
//!
//! With the `serde` feature this is the shape used for JSON output.

use alloc::vec::Vec;

use super::entry::Entry;
use crate::matrix::SparseMatrix;
use crate::traits::MatrixAccess;

/// Dimensions plus the list of stored entries
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixDocument {
    pub rows: usize,
    pub cols: usize,
    pub entries: Vec<Entry>,
}

impl MatrixDocument {
    /// Capture any readable matrix
    pub fn capture<M: MatrixAccess + ?Sized>(matrix: &M) -> Self {
        let (rows, cols) = matrix.dimensions();
        Self {
            rows,
            cols,
            entries: matrix.entries().collect(),
        }
    }
}

impl From<&SparseMatrix> for MatrixDocument {
    fn from(matrix: &SparseMatrix) -> Self {
        Self::capture(matrix)
    }
}

impl From<MatrixDocument> for SparseMatrix {
    fn from(doc: MatrixDocument) -> Self {
        SparseMatrix::from_triples(
            doc.rows,
            doc.cols,
            doc.entries.into_iter().map(|e| (e.row, e.col, e.value)),
        )
    }
}
