//! Stubs read from a directory of `<id>.stub` files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;
use walkdir::WalkDir;

use stratagen_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, StubOrigin, StubSource, StubText},
    },
    domain::StubId,
    error::StratagenResult,
};

/// What a stub directory stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryRole {
    /// `<root>/stubs/<namespace>`, per project.
    Override,
    /// A configured replacement for the bundled stubs.
    Defaults,
}

pub struct DirectoryStubs {
    dir: PathBuf,
    role: DirectoryRole,
    filesystem: Arc<dyn Filesystem>,
}

impl DirectoryStubs {
    pub fn new(dir: impl Into<PathBuf>, role: DirectoryRole, filesystem: Arc<dyn Filesystem>) -> Self {
        Self {
            dir: dir.into(),
            role,
            filesystem,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, id: StubId) -> PathBuf {
        self.dir.join(id.file_name())
    }

    fn origin(&self, path: PathBuf) -> StubOrigin {
        match self.role {
            DirectoryRole::Override => StubOrigin::Override(path),
            DirectoryRole::Defaults => StubOrigin::Directory(path),
        }
    }
}

impl StubSource for DirectoryStubs {
    fn locate(&self, id: StubId) -> Option<StubOrigin> {
        let path = self.path_for(id);
        self.filesystem.exists(&path).then(|| self.origin(path))
    }

    fn load(&self, id: StubId) -> StratagenResult<StubText> {
        let path = self.path_for(id);
        if !self.filesystem.exists(&path) {
            debug!(path = %path.display(), "Stub not in directory");
            return Err(ApplicationError::TemplateNotFound {
                id: id.to_string(),
                searched: vec![path],
            }
            .into());
        }

        let content = self.filesystem.read_to_string(&path)?;
        Ok(StubText {
            id,
            origin: self.origin(path),
            content,
        })
    }
}

/// `.stub` files directly inside `dir` that match no known [`StubId`].
///
/// A missing directory has none.
pub fn unrecognized_stubs(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "stub"))
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_none_or(|name| name.parse::<StubId>().is_err())
        })
        .collect()
}
