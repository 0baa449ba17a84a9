//! Error types surfaced by the tagging pipeline.
//!
//! Three kinds reach users at the CLI boundary: missing input, unprocessable
//! media, and everything else. Unbuilt pipeline stages additionally signal
//! [`TaggerError::NotImplemented`] so callers can tell "not yet built" apart
//! from a runtime failure.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaggerError {
    /// The input path does not exist.
    #[error("media not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input exists but cannot be loaded or decoded.
    #[error("failed to decode {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },

    /// A configuration value is outside its recognized range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The operation is declared but deliberately unbuilt.
    #[error("{0} is not yet implemented")]
    NotImplemented(&'static str),

    /// A detector backend failed to load or run.
    #[error("detector error: {0}")]
    Detector(String),

    /// Filesystem failure while writing output.
    #[error("i/o failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TaggerError {
    /// Builds a [`TaggerError::Unreadable`] from any displayable cause.
    pub(crate) fn unreadable(path: &std::path::Path, cause: impl std::fmt::Display) -> Self {
        TaggerError::Unreadable {
            path: path.to_path_buf(),
            reason: cause.to_string(),
        }
    }
}
