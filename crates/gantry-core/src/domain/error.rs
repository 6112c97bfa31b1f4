use thiserror::Error;

/// Root domain error type.
///
/// Raised when a rendered project tree breaks a structural rule. Parsing the
/// model DSL never produces one of these; it reports diagnostics instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Project structure is empty")]
    EmptyStructure,

    #[error("Duplicate path in project: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path leaves the project root: {path}")]
    PathEscapesRoot { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DuplicatePath { path } => vec![
                format!("Two artifacts resolve to '{}'", path),
                "Check the model definitions for duplicate names".into(),
                "Names that differ only in case map to the same file".into(),
            ],
            Self::EmptyStructure => vec!["Nothing was rendered; this is a bug".into()],
            Self::AbsolutePathNotAllowed { .. } => {
                vec!["Generated paths must be relative to the project root".into()]
            }
            Self::PathEscapesRoot { path } => vec![
                format!("'{}' contains a '..' segment", path),
                "Remove '..' from the model name".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicatePath { .. } | Self::PathEscapesRoot { .. } => {
                ErrorCategory::Validation
            }
            Self::EmptyStructure | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
