//! Stub sources.
//!
//! Resolution for a project, first hit wins:
//! 1. `<root>/stubs/<stub-namespace>/<id>.stub` - per-project override
//! 2. the configured defaults directory (`stubs.default_dir`, or
//!    `$STRATAGEN_STUBS_DIR`), when one is set
//! 3. the stubs compiled into the binary

use std::path::PathBuf;

mod bundled;
mod directory;
mod layered;

pub use bundled::BundledStubs;
pub use directory::{DirectoryRole, DirectoryStubs, unrecognized_stubs};
pub use layered::LayeredStubs;

/// Environment override for the defaults directory.
pub const STUBS_DIR_ENV: &str = "STRATAGEN_STUBS_DIR";

/// `$STRATAGEN_STUBS_DIR` if set and non-empty, else `configured`.
pub fn resolve_default_dir(configured: Option<PathBuf>) -> Option<PathBuf> {
    std::env::var_os(STUBS_DIR_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or(configured)
}
