//! Application layer errors.
//!
//! These errors represent failures in orchestration: rendering, writing,
//! staging and archiving. Structural violations are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::{ErrorCategory, Stage};

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No template body is registered under this id.
    #[error("Template not found: {id}")]
    TemplateNotFound { id: String },

    /// Template rendering failed.
    #[error("Template '{template}' failed to render: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The temporary staging directory could not be created.
    #[error("Could not create staging directory: {reason}")]
    StagingFailed { reason: String },

    /// Walking the staging tree or compressing an entry failed.
    #[error("Archive failed at {path}: {reason}")]
    ArchiveFailed { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,

    /// Strict mode rejected input that produced parse diagnostics.
    #[error("Model definitions produced {count} diagnostic(s) in strict mode")]
    StrictModeViolation { count: usize },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { id } => vec![
                format!("No template registered as '{}'", id),
                "Try: gantry templates to see available templates".into(),
                "Check the override directory for a misnamed .tmpl file".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("Template '{}' could not be rendered", template),
                "If you override templates, check the placeholder names".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::StagingFailed { .. } => vec![
                "The system temporary directory is not writable".into(),
                "Set TMPDIR to a writable location".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::StrictModeViolation { .. } => vec![
                "Run: gantry parse to see each diagnostic".into(),
                "Or drop --strict to skip malformed lines".into(),
            ],
            Self::ArchiveFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::StrictModeViolation { .. } => ErrorCategory::Validation,
            Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::StagingFailed { .. }
            | Self::ArchiveFailed { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }

    /// Pipeline stage this failure belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            Self::StrictModeViolation { .. } => Stage::Parse,
            Self::ArchiveFailed { .. } => Stage::Archive,
            Self::TemplateNotFound { .. }
            | Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::StagingFailed { .. }
            | Self::StoreLockError => Stage::Scaffold,
        }
    }
}
