//! Reading and writing matrix files
//!
//! Files are plain UTF-8 text in the SPMX line format and are read in full;
//! there is no streaming path.

use crate::error::LoadError;
use spmx_core::{decode, encode, MatrixAccess, SparseMatrix};
use std::{fs, path::Path};
use tracing::{debug, info};

/// Entry point for matrix file I/O
pub struct MatrixFile;

impl MatrixFile {
    /// Read and decode the matrix stored at `path`
    pub fn read(path: impl AsRef<Path>) -> Result<SparseMatrix, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let matrix = decode(&content).map_err(|source| {
            if let Some(issue) = source.format_issue() {
                debug!(path = %path.display(), %issue, "rejected matrix file");
            }
            LoadError::Matrix {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let (rows, cols) = matrix.dimensions();
        info!(path = %path.display(), rows, cols, nnz = matrix.nnz(), "loaded matrix");
        Ok(matrix)
    }

    /// Encode `matrix` and write it to `path`, replacing any existing file
    pub fn write<M>(path: impl AsRef<Path>, matrix: &M) -> Result<(), LoadError>
    where
        M: MatrixAccess + ?Sized,
    {
        let path = path.as_ref();
        fs::write(path, encode(matrix)).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), nnz = matrix.nnz(), "wrote matrix");
        Ok(())
    }
}
