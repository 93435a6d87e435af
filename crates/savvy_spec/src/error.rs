//! Error types for structure definitions.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur while loading a structure definition.
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("Structure definition not found at {path}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed structure definition in {path}: {message}")]
    Malformed { path: PathBuf, message: String },
}

impl SpecError {
    /// The source identifier the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            SpecError::NotFound { path, .. } | SpecError::Malformed { path, .. } => path,
        }
    }
}
