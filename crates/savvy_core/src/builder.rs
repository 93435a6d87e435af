//! Scaffold builder.
//!
//! Runs the folder pass, then the template pass. Folders come first so that
//! every template's destination directory already exists when it is written.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Component, Path};
use std::sync::Arc;

use tracing::{debug, info};

use savvy_spec::StructureSpec;
use savvy_templates::{RenderParams, TemplateEngine};

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::progress::ProgressSink;
use crate::registry::ProjectRegistry;
use crate::target::{CreationResult, ProjectTarget};

/// Materializes a [`StructureSpec`] under a [`ProjectTarget`].
pub struct ScaffoldBuilder {
    registry: Arc<ProjectRegistry>,
    engine: TemplateEngine,
}

impl ScaffoldBuilder {
    /// Create a builder that checks targets against `registry`.
    pub fn new(registry: Arc<ProjectRegistry>, engine: TemplateEngine) -> Self {
        Self { registry, engine }
    }

    /// Create the project.
    ///
    /// Nothing is written if the project name is not a single folder name,
    /// the target exists, or a declared path would leave the project root. Failures after that point leave whatever was
    /// already created on disk.
    pub fn build(
        &self,
        spec: &StructureSpec,
        target: &ProjectTarget,
        progress: &mut dyn ProgressSink,
    ) -> ScaffoldResult<CreationResult> {
        let _run = self.registry.lock();
        validate_project_name(&target.project_name)?;
        self.registry.ensure_absent(target)?;
        validate_paths(spec)?;

        let root = target.project_path();
        info!("Creating project '{}' at {:?}", target.project_name, root);

        progress.start(spec.unit_count() as u64);
        fs::create_dir_all(&target.project_dir)?;
        // create_dir, not create_dir_all: a root that appeared since the
        // existence check is never reused
        fs::create_dir(&root).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => ScaffoldError::ProjectExists {
                name: target.project_name.clone(),
                dir: target.project_dir.clone(),
            },
            _ => ScaffoldError::Io(e),
        })?;

        let files_created = self.create_folders(spec, &root)?;
        progress.advance(files_created as u64);

        let templates_rendered = self.create_templates(spec, &root, &target.project_name)?;
        progress.advance(templates_rendered as u64);

        info!(
            "Created {} file(s) and rendered {} template(s)",
            files_created, templates_rendered
        );
        Ok(CreationResult::new(target, files_created, templates_rendered))
    }

    fn create_folders(&self, spec: &StructureSpec, root: &Path) -> ScaffoldResult<usize> {
        let mut count = 0;
        for folder in &spec.folders {
            let dir = root.join(&folder.path);
            fs::create_dir_all(&dir)?;
            debug!("Created folder {:?}", dir);

            for file in &folder.files {
                // create without truncate: a file listed twice keeps its content
                OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(false)
                    .open(dir.join(file))?;
                count += 1;
            }
        }
        Ok(count)
    }

    fn create_templates(
        &self,
        spec: &StructureSpec,
        root: &Path,
        project_name: &str,
    ) -> ScaffoldResult<usize> {
        let params = RenderParams::new(project_name);
        let mut count = 0;
        for entry in &spec.templates {
            let template = self.engine.resolve(&entry.name)?;
            let content = self.engine.render(&template, &params);

            let dest = root.join(&entry.path);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&dest, content)?;
            debug!("Rendered {} -> {:?}", entry.name, dest);
            count += 1;
        }
        Ok(count)
    }
}

/// The project name becomes the root folder, so it must be exactly one
/// normal path segment.
pub(crate) fn validate_project_name(name: &str) -> ScaffoldResult<()> {
    if is_bare_name(Path::new(name)) {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidProjectName(name.to_string()))
    }
}

/// Reject any declared path that is absolute or climbs out of the root.
fn validate_paths(spec: &StructureSpec) -> ScaffoldResult<()> {
    for folder in &spec.folders {
        if !stays_inside(&folder.path) {
            return Err(ScaffoldError::UnsafePath(folder.path.clone()));
        }
        for file in &folder.files {
            if !is_bare_name(Path::new(file)) {
                return Err(ScaffoldError::UnsafePath(folder.path.join(file)));
            }
        }
    }

    for entry in &spec.templates {
        if !names_a_file(&entry.path) {
            return Err(ScaffoldError::UnsafePath(entry.path.clone()));
        }
    }

    Ok(())
}

fn stays_inside(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Inside the root and naming something below it, not the root itself.
fn names_a_file(path: &Path) -> bool {
    stays_inside(path)
        && path
            .components()
            .any(|c| matches!(c, Component::Normal(_)))
}

fn is_bare_name(path: &Path) -> bool {
    let mut components = path.components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
