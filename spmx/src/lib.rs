//! SPMX - Sparse Integer Matrix Arithmetic
//!
//! This crate wraps the I/O-free [`spmx_core`] crate with file loading, an
//! interactive operation dispatcher and the `spmx` command line.
//!
//! ## Architecture
//!
//! - **spmx-core**: matrix type, arithmetic, text format and validation (no I/O)
//! - **spmx**: file access, prompt session, output rendering and logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmx::{MatrixFile, Operation};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let a = MatrixFile::read("a.txt")?;
//!     let b = MatrixFile::read("b.txt")?;
//!     let product = Operation::Multiply.apply(&a, &b)?;
//!     print!("{product}");
//!     Ok(())
//! }
//! ```

// Re-export core abstractions and format definitions
pub use spmx_core::{
    // Matrix and access trait
    SparseMatrix, MatrixAccess, Entry, Index,
    // Arithmetic
    Operation,
    // Format
    decode, encode, MatrixDocument, MatrixHeader,
    // Error handling
    SpmxError, FormatIssue, ErrorCategory, Result,
};

pub mod cli;
pub mod error;
pub mod file_io;
pub mod output;
pub mod session;

pub use cli::Cli;
pub use error::{Failure, LoadError, SessionError};
pub use file_io::MatrixFile;
pub use output::OutputFormat;
pub use session::{Outcome, Request, Session};
