//! Template lookup.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{TemplateError, TemplateResult};
use crate::renderer::{RenderParams, TemplateRenderer};

/// A resolved template: its name, where it was read from, and its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub source: PathBuf,
    pub content: String,
}

/// Resolves named templates under a root directory and renders them.
pub struct TemplateEngine {
    templates_path: PathBuf,
    renderer: TemplateRenderer,
}

impl TemplateEngine {
    /// Create an engine rooted at `templates_path`.
    pub fn new(templates_path: impl Into<PathBuf>) -> Self {
        Self {
            templates_path: templates_path.into(),
            renderer: TemplateRenderer::new(),
        }
    }

    /// The configured template root.
    pub fn templates_path(&self) -> &Path {
        &self.templates_path
    }

    /// Locate a template by name.
    ///
    /// Names are relative to the template root; names that would leave it
    /// are treated as missing.
    pub fn resolve(&self, name: &str) -> TemplateResult<Template> {
        if !is_contained(Path::new(name)) {
            return Err(TemplateError::NotFound(name.to_string()));
        }

        let source = self.templates_path.join(name);
        if !source.is_file() {
            return Err(TemplateError::NotFound(name.to_string()));
        }

        debug!("Resolving template {} from {:?}", name, source);
        let content = fs::read_to_string(&source).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TemplateError::NotFound(name.to_string()),
            _ => TemplateError::Io(e),
        })?;

        Ok(Template {
            name: name.to_string(),
            source,
            content,
        })
    }

    /// Render a resolved template. Pure: same inputs, same text.
    pub fn render(&self, template: &Template, params: &RenderParams) -> String {
        self.renderer.render_content(&template.content, &params.variables())
    }

    /// Render raw template text.
    pub fn render_str(&self, content: &str, params: &RenderParams) -> String {
        self.renderer.render_content(content, &params.variables())
    }
}

fn is_contained(path: &Path) -> bool {
    path.components().next().is_some()
        && path.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
