//! Error types for the scaffold engine.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scaffold operations.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Errors that can occur while creating a project.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The target already exists. Nothing was written.
    #[error("The project '{name}' already exists in '{}'.", .dir.display())]
    ProjectExists { name: String, dir: PathBuf },

    /// The name is not a single path segment. Nothing was written.
    #[error("Invalid project name '{0}': must be a single folder name")]
    InvalidProjectName(String),

    #[error("Path escapes the project root: {0}")]
    UnsafePath(PathBuf),

    #[error("Spec error: {0}")]
    Spec(#[from] savvy_spec::SpecError),

    #[error("Template error: {0}")]
    Template(#[from] savvy_templates::TemplateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScaffoldError {
    /// Whether the caller can report this and carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ScaffoldError::ProjectExists { .. })
    }
}
