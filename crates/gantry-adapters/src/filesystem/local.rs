//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use gantry_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{GantryError, GantryResult},
};

/// Production filesystem implementation using `std::fs`.
///
/// Staging directories are created under `base` (the system temp dir by
/// default) with a random suffix, so concurrent requests never share one.
#[derive(Debug, Clone, Default)]
pub struct LocalFilesystem {
    base: Option<PathBuf>,
}

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create staging directories under `base` instead of the temp dir.
    pub fn with_staging_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> GantryResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> GantryResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> GantryResult<()> {
        match std::fs::remove_dir_all(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io_error(path, e, "remove directory")),
        }
    }

    fn create_staging_dir(&self, prefix: &str) -> GantryResult<PathBuf> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(prefix).rand_bytes(8);

        let dir = match &self.base {
            Some(base) => builder.tempdir_in(base),
            None => builder.tempdir(),
        }
        .map_err(|e| ApplicationError::StagingFailed {
            reason: e.to_string(),
        })?;

        // Removal is owned by the caller's StagingTree guard.
        Ok(dir.keep())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> GantryError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}
