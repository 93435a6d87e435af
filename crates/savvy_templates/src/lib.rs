//! # savvy_templates
//!
//! Template resolution and rendering for savvy.
//!
//! Templates are plain text files stored under a template root and addressed
//! by their relative name. Rendering substitutes `{{ project_name }}` style
//! placeholders and never touches the filesystem.
//!
//! ## Example
//!
//! ```rust,no_run
//! use savvy_templates::{RenderParams, TemplateEngine};
//!
//! let engine = TemplateEngine::new("templates");
//! let template = engine.resolve("readme.tmpl").unwrap();
//! let text = engine.render(&template, &RenderParams::new("my-api"));
//! ```

pub mod engine;
pub mod error;
pub mod renderer;

pub use engine::{Template, TemplateEngine};
pub use error::{TemplateError, TemplateResult};
pub use renderer::{RenderParams, TemplateRenderer};

/// Default template directory name.
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";
