//! Process-wide coordination point for project creation.

use std::fs;
use std::sync::Arc;

use parking_lot::{const_mutex, Mutex, MutexGuard};
use tracing::debug;

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::target::ProjectTarget;

static GLOBAL: Mutex<Option<Arc<ProjectRegistry>>> = const_mutex(None);

/// Guards project creation.
///
/// Creation runs are serialized through [`ProjectRegistry::lock`], and a
/// target that already exists on disk is refused before anything is written.
/// The registry does not lock the filesystem: another process writing to the
/// same target is not detected.
#[derive(Debug, Default)]
pub struct ProjectRegistry {
    creation: Mutex<()>,
}

impl ProjectRegistry {
    /// Create a standalone registry.
    pub fn new() -> Self {
        Self {
            creation: Mutex::new(()),
        }
    }

    /// The shared registry for this process.
    ///
    /// Initialized on first use; concurrent first callers all receive the
    /// same instance.
    pub fn global() -> Arc<ProjectRegistry> {
        let mut slot = GLOBAL.lock();
        slot.get_or_insert_with(|| {
            debug!("Initializing project registry");
            Arc::new(ProjectRegistry::new())
        })
        .clone()
    }

    /// Fail with [`ScaffoldError::ProjectExists`] if the target path exists.
    pub fn ensure_absent(&self, target: &ProjectTarget) -> ScaffoldResult<()> {
        let path = target.project_path();
        if fs::symlink_metadata(&path).is_ok() {
            return Err(ScaffoldError::ProjectExists {
                name: target.project_name.clone(),
                dir: target.project_dir.clone(),
            });
        }
        debug!("Target {:?} is free", path);
        Ok(())
    }

    /// Hold for the duration of a creation run.
    pub fn lock(&self) -> MutexGuard<'_, ()> {
        self.creation.lock()
    }
}
