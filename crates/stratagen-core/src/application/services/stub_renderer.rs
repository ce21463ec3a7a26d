//! Template Renderer - stub lookup, substitution and writing.
//!
//! Rendering is split in two so a caller can render every artifact first
//! and only touch the filesystem once all stubs resolved.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::{
    application::ports::{Filesystem, StubOrigin, StubSource},
    domain::{
        Artifact, ArtifactKind, NAMESPACE_KEY, ProjectLayout, Substitutions,
        unresolved_placeholders,
    },
    error::StratagenResult,
};

/// An artifact rendered in memory, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub origin: StubOrigin,
    pub content: String,
}

pub struct StubRenderer {
    stubs: Box<dyn StubSource>,
    filesystem: Arc<dyn Filesystem>,
    layout: ProjectLayout,
}

impl StubRenderer {
    pub fn new(
        stubs: Box<dyn StubSource>,
        filesystem: Arc<dyn Filesystem>,
        layout: ProjectLayout,
    ) -> Self {
        Self {
            stubs,
            filesystem,
            layout,
        }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Load the artifact's stub and substitute every placeholder.
    ///
    /// `namespace` always comes from the destination path and is applied
    /// first; a caller-supplied `namespace` entry is ignored.
    #[instrument(skip_all, fields(kind = %artifact.kind(), destination = %artifact.destination()))]
    pub fn render_to_string(&self, artifact: &Artifact) -> StratagenResult<RenderedArtifact> {
        let stub = self.stubs.load(artifact.stub())?;
        debug!(stub = %stub.id, origin = %stub.origin, "Stub loaded");

        let mut substitutions = Substitutions::new().with(
            NAMESPACE_KEY,
            self.layout.namespace_for(artifact.destination()),
        );
        for (key, value) in artifact.substitutions().iter() {
            if key == NAMESPACE_KEY {
                warn!("Ignoring caller-supplied namespace substitution");
                continue;
            }
            substitutions.insert(key, value.clone());
        }

        let content = substitutions.apply(&stub.content);

        let leftovers = unresolved_placeholders(&content);
        if !leftovers.is_empty() {
            warn!(
                stub = %stub.id,
                placeholders = ?leftovers,
                "Stub contains placeholders with no value"
            );
        }

        Ok(RenderedArtifact {
            kind: artifact.kind(),
            path: self.layout.app_path(artifact.destination()),
            origin: stub.origin,
            content,
        })
    }

    /// Write a rendered artifact, creating parent directories. Existing
    /// files are overwritten.
    pub fn write(&self, rendered: &RenderedArtifact) -> StratagenResult<PathBuf> {
        if let Some(parent) = rendered.path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&rendered.path, &rendered.content)?;
        debug!(path = %rendered.path.display(), "Artifact written");
        Ok(rendered.path.clone())
    }

    /// Render and write in one step.
    pub fn render(&self, artifact: &Artifact) -> StratagenResult<PathBuf> {
        let rendered = self.render_to_string(artifact)?;
        self.write(&rendered)
    }
}
