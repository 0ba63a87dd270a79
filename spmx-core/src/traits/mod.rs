//! Abstract interfaces for SPMX matrices
//!
//! Traits here are pure interfaces; [`crate::SparseMatrix`] is the
//! concrete implementation.

pub mod matrix;

pub use matrix::MatrixAccess;
