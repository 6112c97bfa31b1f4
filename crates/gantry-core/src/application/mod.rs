//! Application layer for Gantry.
//!
//! This layer contains:
//! - **Services**: use case orchestration (generation, scaffolding, catalogue)
//! - **Ports**: traits for the filesystem, template store, renderer and archiver
//! - **Staging**: the per-request temporary directory guard
//! - **Errors**: application-specific error types
//!
//! Business rules (parsing, naming, layout) live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;
pub mod staging;

#[cfg(test)]
pub(crate) mod testing;

pub use services::{
    GeneratedArchive, GenerationRequest, GenerationService, ScaffoldService, TemplateInfo,
    TemplateScope, TemplateService,
};

pub use ports::{Archiver, Filesystem, PackedArchive, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
pub use staging::StagingTree;
