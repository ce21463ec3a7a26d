//! stratagen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the stratagen
//! Strategy-pattern generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          stratagen-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (StrategyService, StubService)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, StubSource, Prompter)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   stratagen-adapters (Infrastructure)   │
//! │ (LocalFilesystem, LayeredStubs, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (StrategyName, Artifact, ProjectLayout) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stratagen_core::prelude::*;
//!
//! let service = StrategyService::new(
//!     ProjectLayout::new("."),
//!     Arc::new(filesystem), // impl Filesystem
//!     Box::new(stubs),      // impl StubSource
//!     Box::new(prompter),   // impl Prompter
//! );
//! let outcome = service.make(MakeRequest::named("PaymentMethod"))?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationOutcome, MakeRequest, StrategyService, StubInfo, StubService,
        ports::{Filesystem, Prompter, StubOrigin, StubSource, StubText},
    };
    pub use crate::domain::{
        ArtifactKind, NameIssue, ProjectLayout, StrategyBlueprint, StrategyName, StubId,
    };
    pub use crate::error::{StratagenError, StratagenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
