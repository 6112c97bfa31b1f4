//! Unified error handling for Gantry Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with the failing pipeline stage and user-actionable suggestions.

use std::fmt;
use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Gantry Core operations.
#[derive(Debug, Error, Clone)]
pub enum GantryError {
    /// Errors from the domain layer (structural violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl GantryError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
        }
    }

    /// The pipeline stage that failed.
    ///
    /// Parsing itself never fails; `Parse` is only reported when strict mode
    /// turns diagnostics into an error.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Application(e) => e.stage(),
            Self::Domain(_) | Self::Configuration { .. } => Stage::Scaffold,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::StoreLockError | ApplicationError::StagingFailed { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Step of the generation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parse,
    Scaffold,
    Archive,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Parse => "parse",
            Self::Scaffold => "scaffold",
            Self::Archive => "archive",
        })
    }
}

/// Convenient result type alias.
pub type GantryResult<T> = Result<T, GantryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn stage_follows_failure_kind() {
        let render: GantryError = ApplicationError::RenderingFailed {
            template: "model".into(),
            reason: "boom".into(),
        }
        .into();
        assert_eq!(render.stage(), Stage::Scaffold);

        let archive: GantryError = ApplicationError::ArchiveFailed {
            path: PathBuf::from("/tmp/x"),
            reason: "disk full".into(),
        }
        .into();
        assert_eq!(archive.stage(), Stage::Archive);

        let strict: GantryError = ApplicationError::StrictModeViolation { count: 2 }.into();
        assert_eq!(strict.stage(), Stage::Parse);
    }

    #[test]
    fn duplicate_path_is_validation() {
        let err: GantryError = DomainError::DuplicatePath { path: "api/a.yaml".into() }.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn stage_display() {
        assert_eq!(Stage::Archive.to_string(), "archive");
    }
}
