//! Sparse integer matrix storage
//!
//! Only non-zero values are stored, keyed by their `(row, col)` position.
//! The map is ordered row-major so iteration, and therefore encoded output,
//! is reproducible.

use alloc::collections::BTreeMap;

use crate::format::Entry;
use crate::traits::MatrixAccess;

/// Composite position key, ordered row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index {
    pub row: i64,
    pub col: i64,
}

impl Index {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

/// Sparse matrix of `i64` values with fixed dimensions
///
/// Invariant: no stored value is zero. Writing a zero through
/// [`SparseMatrix::set_element`] removes the entry instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SparseMatrix {
    num_rows: usize,
    num_cols: usize,
    entries: BTreeMap<Index, i64>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given dimensions
    pub const fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            entries: BTreeMap::new(),
        }
    }

    /// Build a matrix from `(row, col, value)` triples
    ///
    /// Triples are applied in order through [`SparseMatrix::set_element`], so
    /// later writes win and zero values clear earlier ones.
    pub fn from_triples<I>(num_rows: usize, num_cols: usize, triples: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64, i64)>,
    {
        triples
            .into_iter()
            .fold(Self::new(num_rows, num_cols), |mut m, (r, c, v)| {
                m.set_element(r, c, v);
                m
            })
    }

    pub const fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub const fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Get matrix dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Number of stored non-zero entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the value at `(row, col)`, or `0` when nothing is stored there
    pub fn get_element(&self, row: i64, col: i64) -> i64 {
        self.entries
            .get(&Index::new(row, col))
            .copied()
            .unwrap_or(0)
    }

    /// Store `value` at `(row, col)`
    ///
    /// A zero value removes any existing entry; removing an absent entry is a
    /// no-op. No bounds checking is done against the declared dimensions.
    pub fn set_element(&mut self, row: i64, col: i64, value: i64) {
        let index = Index::new(row, col);
        if value == 0 {
            self.entries.remove(&index);
        } else {
            self.entries.insert(index, value);
        }
    }

    /// Iterate stored entries in row-major order
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.entries
            .iter()
            .map(|(index, &value)| Entry::new(index.row, index.col, value))
    }

    /// Iterate raw `(position, value)` pairs in row-major order
    pub(crate) fn stored(&self) -> impl Iterator<Item = (Index, i64)> + '_ {
        self.entries.iter().map(|(&index, &value)| (index, value))
    }
}

impl MatrixAccess for SparseMatrix {
    fn get_element(&self, row: i64, col: i64) -> i64 {
        SparseMatrix::get_element(self, row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        SparseMatrix::dimensions(self)
    }

    fn nnz(&self) -> usize {
        SparseMatrix::nnz(self)
    }

    fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        SparseMatrix::entries(self)
    }
}
