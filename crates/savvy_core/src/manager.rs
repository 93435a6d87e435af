//! Entry point for creating a new project.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use savvy_spec::{StructureLoader, DEFAULT_STRUCTURE_FILE};
use savvy_templates::{TemplateEngine, DEFAULT_TEMPLATES_DIR};

use crate::builder::{validate_project_name, ScaffoldBuilder};
use crate::error::ScaffoldResult;
use crate::progress::ProgressSink;
use crate::registry::ProjectRegistry;
use crate::target::{CreationResult, ProjectTarget};

/// Where the engine finds its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Structure definition file.
    pub structure_path: PathBuf,
    /// Directory templates are resolved against.
    pub templates_dir: PathBuf,
}

impl ScaffoldConfig {
    /// Config with an explicit structure file and template directory.
    pub fn new(structure_path: impl Into<PathBuf>, templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            structure_path: structure_path.into(),
            templates_dir: templates_dir.into(),
        }
    }

    /// Default layout: `base/structure.yaml` and `base/templates`.
    pub fn from_dir(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self::new(
            base.join(DEFAULT_STRUCTURE_FILE),
            base.join(DEFAULT_TEMPLATES_DIR),
        )
    }

    /// Override the structure definition file.
    pub fn with_structure_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.structure_path = path.into();
        self
    }

    /// Override the template directory.
    pub fn with_templates_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.templates_dir = path.into();
        self
    }
}

/// Creates projects from a configured structure definition and template set.
pub struct ProjectManager {
    config: ScaffoldConfig,
    registry: Arc<ProjectRegistry>,
}

impl ProjectManager {
    /// Manager bound to the process-wide registry.
    pub fn new(config: ScaffoldConfig) -> Self {
        Self::with_registry(config, ProjectRegistry::global())
    }

    /// Manager bound to an explicitly constructed registry.
    pub fn with_registry(config: ScaffoldConfig, registry: Arc<ProjectRegistry>) -> Self {
        Self { config, registry }
    }

    /// The inputs this manager reads.
    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Create `project_dir/project_name`.
    ///
    /// An empty `project_dir` means the current directory. The project name
    /// must be a single folder name. The structure definition is read fresh
    /// on every call, after the existence check.
    pub fn new_project(
        &self,
        project_dir: impl AsRef<Path>,
        project_name: &str,
        progress: &mut dyn ProgressSink,
    ) -> ScaffoldResult<CreationResult> {
        let project_dir = project_dir.as_ref();
        let project_dir = if project_dir.as_os_str().is_empty() {
            std::env::current_dir()?
        } else {
            project_dir.to_path_buf()
        };

        validate_project_name(project_name)?;
        let target = ProjectTarget::new(project_dir, project_name);
        self.registry.ensure_absent(&target)?;

        info!("Loading structure from {:?}", self.config.structure_path);
        let spec = StructureLoader::load(&self.config.structure_path)?;

        let builder = ScaffoldBuilder::new(
            Arc::clone(&self.registry),
            TemplateEngine::new(&self.config.templates_dir),
        );
        builder.build(&spec, &target, progress)
    }
}
