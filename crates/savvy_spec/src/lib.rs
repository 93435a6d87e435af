//! # savvy_spec
//!
//! Project structure definitions for savvy.
//!
//! A structure definition declares the folders (and the empty files inside
//! them) plus the templates that make up a freshly scaffolded project:
//!
//! ```yaml
//! folders:
//!   - path: src
//!     files: [__init__.py]
//! templates:
//!   - name: readme.tmpl
//!     path: README.md
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use savvy_spec::StructureLoader;
//!
//! let spec = StructureLoader::load("structure.yaml").unwrap();
//! println!("{} units of work", spec.unit_count());
//! ```

pub mod error;
pub mod loader;
pub mod models;

pub use error::{SpecError, SpecResult};
pub use loader::{SpecFormat, StructureLoader};
pub use models::{FolderSpec, StructureSpec, TemplateSpec};

/// Default file name of the structure definition.
pub const DEFAULT_STRUCTURE_FILE: &str = "structure.yaml";
