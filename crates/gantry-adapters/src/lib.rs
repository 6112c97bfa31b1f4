//! Infrastructure adapters for Gantry.
//!
//! This crate implements the ports defined in `gantry-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod archiver;
pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;
pub mod template_loader;
pub mod template_store;

// Re-export commonly used adapters
pub use archiver::ZipArchiver;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::MiniJinjaRenderer;
pub use template_loader::OverrideLoader;
pub use template_store::InMemoryStore;

use gantry_core::application::GenerationService;

/// Wire the production adapters into a [`GenerationService`].
pub fn local_generation_service(store: InMemoryStore) -> GenerationService {
    GenerationService::new(
        Box::new(store),
        Box::new(MiniJinjaRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(ZipArchiver::new()),
    )
}
