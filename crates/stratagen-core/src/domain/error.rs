// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Strategy name '{input}' is empty once separators and spaces are removed")]
    EmptyStrategyName { input: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project source directory: {path}")]
    PathEscapesRoot { path: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Unknown stub '{0}'")]
    UnknownStub(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyStrategyName { .. } => vec![
                "Provide a strategy name such as PaymentMethod".into(),
                "Nested names are allowed: Billing/PaymentMethod".into(),
            ],
            Self::AbsolutePathNotAllowed { path } | Self::PathEscapesRoot { path } => vec![
                format!("'{}' would be written outside the project", path),
                "Use plain class names for strategies and implementations".into(),
            ],
            Self::UnknownStub(_) => vec![
                "Known stubs: strategy-contract, strategy-implementation, strategy-factory, strategy-pipeline".into(),
                "Try: stratagen list".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyStrategyName { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. } => ErrorCategory::Validation,
            Self::UnknownStub(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
