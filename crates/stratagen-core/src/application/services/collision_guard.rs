//! Collision Guard - refuses to generate over an existing strategy.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::ports::Filesystem;

pub struct CollisionGuard {
    filesystem: Arc<dyn Filesystem>,
}

impl CollisionGuard {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// The first candidate that already exists, if any.
    pub fn check<P: AsRef<Path>>(&self, candidates: &[P]) -> Option<PathBuf> {
        let hit = candidates
            .iter()
            .map(|candidate| candidate.as_ref())
            .find(|path| self.filesystem.exists(path))
            .map(Path::to_path_buf);

        debug!(candidates = candidates.len(), collision = hit.is_some(), "Collision check");
        hit
    }
}
