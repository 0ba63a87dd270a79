//! Text format definitions for SPMX matrix files
//!
//! A document is two header lines followed by any number of entry lines:
//!
//! ```text
//! rows=2
//! cols=2
//! (0, 0, 5)
//! (1, 1, -3)
//! ```
//!
//! Space and tab padding around tokens is ignored, as are blank lines.

pub mod codec;
pub mod constants;
pub mod document;
pub mod entry;
pub mod header;

// Re-export format definitions
pub use codec::{decode, decode_lines, encode, write_matrix};
pub use document::MatrixDocument;
pub use entry::Entry;
pub use header::MatrixHeader;
