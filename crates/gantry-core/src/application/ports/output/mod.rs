//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `gantry-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{GenerationContext, TemplateSource};
use crate::error::GantryResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `gantry_adapters::filesystem::LocalFilesystem` (production)
/// - `gantry_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> GantryResult<()>;

    /// Write content to a file. The parent directory must exist.
    fn write_file(&self, path: &Path, content: &[u8]) -> GantryResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> GantryResult<()>;

    /// Create a fresh, uniquely named directory owned by the caller.
    fn create_staging_dir(&self, prefix: &str) -> GantryResult<PathBuf>;
}

/// Port for template body lookup.
///
/// Stores are populated once at startup and only read afterwards.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Get the template registered under `id`.
    fn get(&self, id: &str) -> GantryResult<TemplateSource>;

    /// List all available templates.
    fn list(&self) -> GantryResult<Vec<TemplateSource>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `gantry_adapters::renderer::MiniJinjaRenderer`
pub trait TemplateRenderer: Send + Sync {
    /// Render `template` against `context`.
    ///
    /// A failure must carry the template id and the underlying cause.
    fn render(
        &self,
        template: &TemplateSource,
        context: &GenerationContext<'_>,
    ) -> GantryResult<Vec<u8>>;
}

/// Bytes of a finished archive and the number of files packed into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedArchive {
    pub bytes: Vec<u8>,
    pub entries: usize,
}

/// Port for packaging a finished tree into a single archive.
///
/// Implemented by:
/// - `gantry_adapters::archiver::ZipArchiver`
#[cfg_attr(test, mockall::automock)]
pub trait Archiver: Send + Sync {
    /// Archive every regular file under `root`, named relative to it.
    fn archive(&self, root: &Path) -> GantryResult<PackedArchive>;
}
