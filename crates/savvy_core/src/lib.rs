//! # savvy_core
//!
//! Scaffold generation engine for savvy.
//!
//! The engine turns a [`StructureSpec`](savvy_spec::StructureSpec) and a
//! [`ProjectTarget`] into a project on disk, exactly once:
//!
//! 1. The [`ProjectRegistry`] refuses targets that already exist.
//! 2. The folder pass creates every declared directory and empty file.
//! 3. The template pass renders every template with the project name.
//!
//! Progress is reported through an injected [`ProgressSink`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use savvy_core::{NoProgress, ProjectManager, ScaffoldConfig};
//!
//! let manager = ProjectManager::new(ScaffoldConfig::from_dir("."));
//! let result = manager.new_project("/tmp", "demo", &mut NoProgress).unwrap();
//! println!("{}", result);
//! ```

pub mod builder;
pub mod error;
pub mod manager;
pub mod progress;
pub mod registry;
pub mod target;

pub use builder::ScaffoldBuilder;
pub use error::{ScaffoldError, ScaffoldResult};
pub use manager::{ProjectManager, ScaffoldConfig};
pub use progress::{NoProgress, ProgressSink, RecordingProgress};
pub use registry::ProjectRegistry;
pub use target::{CreationResult, ProjectTarget};
