//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stratagen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `StubSource`: Stub template retrieval
//!   - `Prompter`: Operator questions and notes

pub mod output;

pub use output::{Filesystem, Prompter, StubOrigin, StubSource, StubText};
