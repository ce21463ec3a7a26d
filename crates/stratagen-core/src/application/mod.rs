//! Application layer for stratagen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (StrategyService, StubService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation rules itself. Naming, placement and substitution live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CollisionGuard, GenerationOutcome, InputCollector, MakeRequest, RenderedArtifact,
    StrategyService, StubInfo, StubRenderer, StubService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, Prompter, StubOrigin, StubSource, StubText};

pub use error::ApplicationError;
