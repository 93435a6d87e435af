//! Creation target and outcome.

use std::fmt;
use std::path::{Path, PathBuf};

/// Where a project is created: `project_dir/project_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTarget {
    pub project_dir: PathBuf,
    pub project_name: String,
}

impl ProjectTarget {
    /// Target for `project_dir/project_name`.
    pub fn new(project_dir: impl Into<PathBuf>, project_name: impl Into<String>) -> Self {
        Self {
            project_dir: project_dir.into(),
            project_name: project_name.into(),
        }
    }

    /// The top-level folder of the new project.
    pub fn project_path(&self) -> PathBuf {
        self.project_dir.join(&self.project_name)
    }
}

/// Summary of a successful creation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationResult {
    pub project_name: String,
    pub project_dir: PathBuf,
    pub project_path: PathBuf,
    pub files_created: usize,
    pub templates_rendered: usize,
}

impl CreationResult {
    pub(crate) fn new(target: &ProjectTarget, files_created: usize, templates_rendered: usize) -> Self {
        Self {
            project_name: target.project_name.clone(),
            project_dir: target.project_dir.clone(),
            project_path: target.project_path(),
            files_created,
            templates_rendered,
        }
    }

    /// Progress units completed by the run.
    pub fn units(&self) -> usize {
        self.files_created + self.templates_rendered
    }

    /// Where the project was created.
    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// Human-readable success message.
    pub fn message(&self) -> String {
        format!(
            "New project '{}' created successfully in '{}'.",
            self.project_name,
            self.project_dir.display()
        )
    }
}

impl fmt::Display for CreationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
