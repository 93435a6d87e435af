//! Structure definition models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Declarative description of a project layout.
///
/// Both collections are required; an empty list is fine but a missing key is
/// rejected by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureSpec {
    pub folders: Vec<FolderSpec>,
    pub templates: Vec<TemplateSpec>,
}

/// A directory to create, and the empty files to place inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderSpec {
    /// Directory path relative to the project root.
    pub path: PathBuf,
    /// Bare file names created empty within `path`.
    pub files: Vec<String>,
}

/// A template to render into the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSpec {
    /// Template identifier, resolved against the template directory.
    pub name: String,
    /// Output file path relative to the project root.
    pub path: PathBuf,
}

impl StructureSpec {
    /// Build a definition in memory.
    pub fn new(folders: Vec<FolderSpec>, templates: Vec<TemplateSpec>) -> Self {
        Self { folders, templates }
    }

    /// Total number of files declared across all folders.
    pub fn file_count(&self) -> usize {
        self.folders.iter().map(|f| f.files.len()).sum()
    }

    /// Units of work a build performs: every file plus every template.
    /// Creating a folder is not a unit on its own.
    pub fn unit_count(&self) -> usize {
        self.file_count() + self.templates.len()
    }
}

impl FolderSpec {
    /// Folder at `path` holding the given empty files.
    pub fn new(path: impl Into<PathBuf>, files: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            path: path.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}

impl TemplateSpec {
    /// Render template `name` to `path`.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
