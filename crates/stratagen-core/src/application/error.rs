//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not naming
//! rules. Naming errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No stub source could provide the requested stub.
    #[error("Stub '{id}' not found")]
    TemplateNotFound { id: String, searched: Vec<PathBuf> },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Reading an answer from the operator failed.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// A required answer stayed empty.
    #[error("A {field} is required")]
    InputRequired { field: &'static str },

    /// In-memory adapter state was poisoned.
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { id, searched } => {
                let mut out = vec![format!("No stub named '{}.stub' was found", id)];
                for path in searched {
                    out.push(format!("  searched: {}", path.display()));
                }
                out.push("Unset stubs.default_dir to fall back to the built-in stubs".into());
                out
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Run the command from an interactive terminal".into(),
                "Or pipe answers on stdin, one per line".into(),
            ],
            Self::InputRequired { field } => vec![
                format!("Provide a {} when prompted", field),
                "Or pass it as an argument: stratagen make PaymentMethod".into(),
            ],
            Self::StoreLockError => vec!["This is a bug in a test adapter".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::PromptFailed { .. } => ErrorCategory::Internal,
            Self::InputRequired { .. } => ErrorCategory::Validation,
        }
    }
}
