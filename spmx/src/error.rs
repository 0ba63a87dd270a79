//! Error types for the I/O layer

use spmx_core::SpmxError;
use std::{fmt, io, path::Path, path::PathBuf};

/// Failure to read or write a matrix file
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read or written
    Io { path: PathBuf, source: io::Error },
    /// The file was read but its content is not a valid matrix document
    Matrix { path: PathBuf, source: SpmxError },
}

impl LoadError {
    /// Path of the file involved
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Matrix { path, .. } => path,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "Could not access {}: {source}", path.display())
            }
            // The core message is shown as-is
            LoadError::Matrix { source, .. } => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Matrix { source, .. } => Some(source),
        }
    }
}

/// Why a session ended without a result
///
/// These are reported to the user and end the run cleanly.
#[derive(Debug)]
pub enum Failure {
    Load(LoadError),
    Compute(SpmxError),
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Load(err) => write!(f, "{err}"),
            Failure::Compute(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Failure::Load(err) => Some(err),
            Failure::Compute(err) => Some(err),
        }
    }
}

impl From<LoadError> for Failure {
    fn from(err: LoadError) -> Self {
        Failure::Load(err)
    }
}

impl From<SpmxError> for Failure {
    fn from(err: SpmxError) -> Self {
        Failure::Compute(err)
    }
}

/// Errors on the session's own streams
#[derive(Debug)]
pub enum SessionError {
    /// Reading a prompt answer or writing output failed
    Io(io::Error),
    /// The result could not be rendered as JSON
    #[cfg(feature = "json")]
    Json(serde_json::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Io(err) => write!(f, "I/O error: {err}"),
            #[cfg(feature = "json")]
            SessionError::Json(err) => write!(f, "JSON rendering failed: {err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io(err) => Some(err),
            #[cfg(feature = "json")]
            SessionError::Json(err) => Some(err),
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        SessionError::Io(err)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::Json(err)
    }
}
