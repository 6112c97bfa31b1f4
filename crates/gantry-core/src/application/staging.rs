//! Scoped staging directory for a single generation request.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{application::ports::Filesystem, error::GantryResult};

/// A temporary directory that is removed when the guard is dropped.
///
/// Owned by exactly one request. Cleanup runs on every exit path, including
/// early returns through `?`; a failed removal is logged, never propagated.
pub struct StagingTree<'fs> {
    root: PathBuf,
    filesystem: &'fs dyn Filesystem,
}

impl<'fs> StagingTree<'fs> {
    pub fn create(filesystem: &'fs dyn Filesystem, prefix: &str) -> GantryResult<Self> {
        let root = filesystem.create_staging_dir(prefix)?;
        debug!(root = %root.display(), "Staging directory created");
        Ok(Self { root, filesystem })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Drop for StagingTree<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.filesystem.remove_dir_all(&self.root) {
            warn!(
                error = %e,
                path = %self.root.display(),
                "Staging cleanup failed"
            );
        } else {
            debug!(path = %self.root.display(), "Staging directory removed");
        }
    }
}
