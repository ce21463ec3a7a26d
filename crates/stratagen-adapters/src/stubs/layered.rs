//! Ordered stub lookup: the first layer that has a stub wins.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, instrument};

use stratagen_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, StubOrigin, StubSource, StubText},
    },
    domain::{ProjectLayout, StubId},
    error::{StratagenError, StratagenResult},
};

use super::{BundledStubs, DirectoryRole, DirectoryStubs};

pub struct LayeredStubs {
    layers: Vec<Box<dyn StubSource>>,
}

impl LayeredStubs {
    pub fn new(layers: Vec<Box<dyn StubSource>>) -> Self {
        Self { layers }
    }

    /// Project override directory first, then `default_dir` if given,
    /// otherwise the bundled stubs.
    pub fn for_project(
        layout: &ProjectLayout,
        default_dir: Option<PathBuf>,
        filesystem: Arc<dyn Filesystem>,
    ) -> Self {
        let overrides = DirectoryStubs::new(
            layout.override_dir(),
            DirectoryRole::Override,
            Arc::clone(&filesystem),
        );

        let defaults: Box<dyn StubSource> = match default_dir {
            Some(dir) => Box::new(DirectoryStubs::new(dir, DirectoryRole::Defaults, filesystem)),
            None => Box::new(BundledStubs::new()),
        };

        Self::new(vec![Box::new(overrides), defaults])
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl StubSource for LayeredStubs {
    fn locate(&self, id: StubId) -> Option<StubOrigin> {
        self.layers.iter().find_map(|layer| layer.locate(id))
    }

    /// Missing everywhere: one `TemplateNotFound` listing every searched path.
    #[instrument(skip(self), fields(layers = self.layers.len()))]
    fn load(&self, id: StubId) -> StratagenResult<StubText> {
        let mut searched = Vec::new();

        for layer in &self.layers {
            match layer.load(id) {
                Ok(text) => {
                    debug!(origin = %text.origin, "Stub resolved");
                    return Ok(text);
                }
                Err(StratagenError::Application(ApplicationError::TemplateNotFound {
                    searched: paths,
                    ..
                })) => searched.extend(paths),
                Err(other) => return Err(other),
            }
        }

        Err(ApplicationError::TemplateNotFound {
            id: id.to_string(),
            searched,
        }
        .into())
    }
}
