// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for stratagen.
//!
//! This module contains pure generation logic with no I/O. Filesystem
//! access, stub loading and prompting are reached through ports defined in
//! the application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, terminal, or external calls
//! - **Immutable values**: names, blueprints and artifacts are Clone + PartialEq
pub mod artifact;
pub mod assembly;
pub mod common;
pub mod error;
pub mod layout;
pub mod strategy;

mod validation;

pub use artifact::{
    Artifact, ArtifactKind, NAMESPACE_KEY, StubId, SubstitutionValue, Substitutions, token,
    unresolved_placeholders,
};
pub use assembly::plan_artifacts;
pub use common::RelativePath;
pub use error::{DomainError, ErrorCategory};
pub use layout::{ProjectLayout, STRATEGIES_DIR};
pub use strategy::{StrategyBlueprint, StrategyName};
pub use validation::{DomainValidator, NameIssue, NameRole};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // End-to-end planning + substitution, no I/O
    // ========================================================================

    const CONTRACT_STUB: &str = "namespace {{ namespace }};\n\ninterface {{ name }}StrategyContract\n{\n{{ methods }}\n}\n";

    #[test]
    fn planned_contract_renders_every_method_signature() {
        let bp = StrategyBlueprint::new(
            StrategyName::parse("PaymentMethod").unwrap(),
            vec!["pay".into(), "restore".into()],
            vec![],
            false,
        );
        let layout = ProjectLayout::new("/project");
        let artifacts = plan_artifacts(&bp, &layout).unwrap();

        let contract = &artifacts[0];
        let subs = contract
            .substitutions()
            .clone()
            .with(NAMESPACE_KEY, layout.namespace_for(contract.destination()));
        let rendered = subs.apply(CONTRACT_STUB);

        assert!(rendered.contains("namespace App\\Strategies\\PaymentMethod\\Contracts;"));
        assert!(rendered.contains("interface PaymentMethodStrategyContract"));
        assert!(rendered.contains("public function pay(): void;"));
        assert!(rendered.contains("public function restore(): void;"));
        assert!(unresolved_placeholders(&rendered).is_empty());
    }

    #[test]
    fn error_categories() {
        assert_eq!(
            DomainError::EmptyStrategyName { input: " ".into() }.category(),
            ErrorCategory::Validation
        );
        assert_eq!(DomainError::UnknownStub("x".into()).category(), ErrorCategory::NotFound);
    }

    #[test]
    fn every_error_has_suggestions() {
        let errors = [
            DomainError::EmptyStrategyName { input: String::new() },
            DomainError::AbsolutePathNotAllowed { path: "/x".into() },
            DomainError::PathEscapesRoot { path: "../x".into() },
            DomainError::UnknownStub("x".into()),
        ];
        for e in errors {
            assert!(!e.suggestions().is_empty(), "{e}");
        }
    }
}
