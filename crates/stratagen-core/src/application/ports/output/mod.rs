//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stratagen-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::StubId;
use crate::error::StratagenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stratagen_adapters::filesystem::LocalFilesystem` (production)
/// - `stratagen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Check if a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StratagenResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> StratagenResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> StratagenResult<String>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> StratagenResult<()>;
}

/// Where a stub was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum StubOrigin {
    /// Project-local override under `<root>/stubs/<namespace>/`.
    Override(PathBuf),
    /// A configured directory of default stubs.
    Directory(PathBuf),
    /// Compiled into the binary.
    Bundled,
}

impl fmt::Display for StubOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override(path) => write!(f, "override ({})", path.display()),
            Self::Directory(path) => write!(f, "defaults ({})", path.display()),
            Self::Bundled => f.write_str("bundled"),
        }
    }
}

/// A loaded stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubText {
    pub id: StubId,
    pub origin: StubOrigin,
    pub content: String,
}

/// Port for stub template retrieval.
///
/// Implemented by:
/// - `stratagen_adapters::stubs::BundledStubs` (compiled-in defaults)
/// - `stratagen_adapters::stubs::DirectoryStubs` (override or defaults directory)
/// - `stratagen_adapters::stubs::LayeredStubs` (first hit wins)
pub trait StubSource: Send + Sync {
    /// Where `id` would be loaded from, without reading it.
    fn locate(&self, id: StubId) -> Option<StubOrigin>;

    /// Load a stub. Fails with `ApplicationError::TemplateNotFound` when
    /// this source has no such stub.
    fn load(&self, id: StubId) -> StratagenResult<StubText>;
}

/// Port for operator interaction.
///
/// Implemented by:
/// - `stratagen_adapters::prompt::LinePrompter` (plain stdin/stdout)
/// - `stratagen_adapters::prompt::ScriptedPrompter` (testing)
/// - the CLI's dialoguer prompter (interactive terminals)
pub trait Prompter {
    /// Ask a free-text question. An empty string means the operator
    /// submitted nothing (or input ended).
    fn text(&self, label: &str, placeholder: &str) -> StratagenResult<String>;

    /// Ask a yes/no question.
    fn confirm(&self, label: &str, default: bool) -> StratagenResult<bool>;

    /// Show an informational note.
    fn note(&self, message: &str) -> StratagenResult<()>;
}
