#![cfg_attr(not(test), no_std)]

//! SPMX Core - Sparse Integer Matrix Type and Text Format
//!
//! This crate provides the sparse matrix data structure, its arithmetic, and
//! the parser/encoder for the line-oriented `rows=`/`cols=` text format. It
//! performs no I/O.
//!
//! ```
//! use spmx_core::{decode, encode, SparseMatrix};
//!
//! let a = decode("rows=1\ncols=2\n(0, 0, 2)\n(0, 1, 3)").unwrap();
//! let b: SparseMatrix = "rows=2\ncols=1\n(0, 0, 4)\n(1, 0, 5)".parse().unwrap();
//! let product = a.multiply(&b).unwrap();
//! assert_eq!(encode(&product), "rows=1\ncols=1\n(0, 0, 23)\n");
//! ```

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

pub use error::{ErrorCategory, FormatIssue, Result, SpmxError};
pub use format::{decode, decode_lines, encode, write_matrix, Entry, MatrixDocument, MatrixHeader};
pub use matrix::{Index, SparseMatrix};
pub use ops::{Operation, UnknownOperation};
pub use traits::MatrixAccess;
pub use validation::{is_integer, split_lines, trim_spaces};
