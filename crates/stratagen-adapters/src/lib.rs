//! Infrastructure adapters for stratagen.
//!
//! This crate implements the ports defined in `stratagen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod prompt;
pub mod stubs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompt::{LinePrompter, ScriptedPrompter};
pub use stubs::{BundledStubs, DirectoryStubs, LayeredStubs};
