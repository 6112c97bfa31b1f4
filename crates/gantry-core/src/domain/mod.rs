//! Core domain layer for Gantry.
//!
//! This module contains pure logic with no I/O. Template rendering, file
//! writing and archiving are reached only through the ports defined in the
//! application layer.
//!
//! - **inflector**: naming conventions derived from a model name
//! - **dsl**: the lenient model description parser
//! - **blueprint**: the fixed directory and artifact layout
//! - **entities**: models, project identity, render contexts, rendered trees
//
// Public API - what the world sees
pub mod blueprint;
pub mod dsl;
pub mod entities;
pub mod error;
pub mod inflector;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use blueprint::{ModelArtifact, ProjectArtifact, SKELETON_DIRS, expected_file_count};
pub use dsl::{Diagnostic, DslParser, ParseOutcome, RequiredRule};
pub use entities::{
    model::{Model, ModelField, ProjectIdentity},
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    template::{GenerationContext, TemplateSource},
};

pub use error::{DomainError, ErrorCategory};

pub use validation::DomainValidator;
