//! Read access to sparse matrices
//!
//! The encoder and anything else that only inspects a matrix is written
//! against this trait instead of the concrete storage type.

use crate::format::Entry;

/// Read-only view of a sparse integer matrix
pub trait MatrixAccess {
    /// Get the value at the specified position
    ///
    /// Positions without a stored entry read as `0`. Indices are not checked
    /// against the declared dimensions.
    fn get_element(&self, row: i64, col: i64) -> i64;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;

    /// Iterate stored non-zero entries in a deterministic order
    fn entries(&self) -> impl Iterator<Item = Entry> + '_;
}
