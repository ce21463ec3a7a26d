//! Strategy Service - main application orchestrator.
//!
//! This service coordinates one `make` run:
//! 1. Resolve the strategy name (argument or prompt)
//! 2. Guard against an existing strategy directory
//! 3. Collect methods, implementations and the pipeline flag
//! 4. Plan and render every artifact in memory
//! 5. Write to the filesystem, rolling back on failure

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::{Filesystem, Prompter, StubSource},
        services::{CollisionGuard, InputCollector, RenderedArtifact, StubRenderer},
    },
    domain::{DomainValidator as validator, NameIssue, ProjectLayout, plan_artifacts},
    error::StratagenResult,
};

/// Input to [`StrategyService::make`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MakeRequest {
    /// Raw strategy name from the command line; prompted for when absent.
    pub name: Option<String>,
    /// Render everything but write nothing.
    pub dry_run: bool,
}

impl MakeRequest {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Result of a `make` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GenerationOutcome {
    /// Files were written.
    Created {
        strategy: String,
        files: Vec<PathBuf>,
        issues: Vec<NameIssue>,
    },
    /// Dry run: files that would have been written.
    Planned {
        strategy: String,
        files: Vec<PathBuf>,
        issues: Vec<NameIssue>,
    },
    /// The strategy directory already exists; nothing was asked or written
    /// after the name.
    Collision {
        strategy: String,
        class_name: String,
        path: PathBuf,
    },
}

impl GenerationOutcome {
    pub fn files(&self) -> &[PathBuf] {
        match self {
            Self::Created { files, .. } | Self::Planned { files, .. } => files,
            Self::Collision { .. } => &[],
        }
    }

    pub fn issues(&self) -> &[NameIssue] {
        match self {
            Self::Created { issues, .. } | Self::Planned { issues, .. } => issues,
            Self::Collision { .. } => &[],
        }
    }

    pub fn is_collision(&self) -> bool {
        matches!(self, Self::Collision { .. })
    }
}

pub struct StrategyService {
    renderer: StubRenderer,
    guard: CollisionGuard,
    filesystem: Arc<dyn Filesystem>,
    prompter: Box<dyn Prompter>,
}

impl StrategyService {
    pub fn new(
        layout: ProjectLayout,
        filesystem: Arc<dyn Filesystem>,
        stubs: Box<dyn StubSource>,
        prompter: Box<dyn Prompter>,
    ) -> Self {
        Self {
            renderer: StubRenderer::new(stubs, Arc::clone(&filesystem), layout),
            guard: CollisionGuard::new(Arc::clone(&filesystem)),
            filesystem,
            prompter,
        }
    }

    pub fn layout(&self) -> &ProjectLayout {
        self.renderer.layout()
    }

    /// Generate one strategy.
    #[instrument(skip_all, fields(root = %self.layout().root().display(), dry_run = request.dry_run))]
    pub fn make(&self, request: MakeRequest) -> StratagenResult<GenerationOutcome> {
        let collector = InputCollector::new(self.prompter.as_ref());
        let layout = self.layout();

        // 1-2. Name, then collision check before any further question
        let name = collector.strategy_name(request.name.as_deref())?;
        let strategy_dir = layout.app_path(&layout.strategy_dir(&name)?);

        if let Some(path) = self.guard.check(&[&strategy_dir]) {
            info!(strategy = %name, path = %path.display(), "Strategy already exists");
            return Ok(GenerationOutcome::Collision {
                strategy: name.path().to_owned(),
                class_name: name.class_name().to_owned(),
                path,
            });
        }

        // 3. Remaining answers
        let blueprint = collector.blueprint(name)?;
        let issues = validator::name_issues(&blueprint);
        for issue in &issues {
            warn!(%issue, "Suspicious name");
        }

        // 4. Render everything before writing anything
        let artifacts = plan_artifacts(&blueprint, layout)?;
        let rendered = artifacts
            .iter()
            .map(|artifact| self.renderer.render_to_string(artifact))
            .collect::<StratagenResult<Vec<_>>>()?;

        let strategy = blueprint.name().path().to_owned();

        if request.dry_run {
            info!(strategy = %strategy, files = rendered.len(), "Dry run, nothing written");
            return Ok(GenerationOutcome::Planned {
                strategy,
                files: rendered.into_iter().map(|r| r.path).collect(),
                issues,
            });
        }

        // 5. Write
        let created_root = self.first_missing_ancestor(&strategy_dir);
        let files = match self.write_all(&rendered) {
            Ok(files) => files,
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(&created_root);
                return Err(e);
            }
        };

        info!(strategy = %strategy, files = files.len(), "Strategy generated");
        Ok(GenerationOutcome::Created {
            strategy,
            files,
            issues,
        })
    }

    fn write_all(&self, rendered: &[RenderedArtifact]) -> StratagenResult<Vec<PathBuf>> {
        rendered
            .iter()
            .map(|artifact| self.renderer.write(artifact))
            .collect()
    }

    /// Topmost directory below the app root on the way to `strategy_dir`
    /// that does not exist yet. The app root itself is never included.
    fn first_missing_ancestor(&self, strategy_dir: &Path) -> PathBuf {
        let app_root = self.layout().app_root();
        strategy_dir
            .ancestors()
            .take_while(|dir| dir.starts_with(&app_root) && *dir != app_root.as_path())
            .take_while(|dir| !self.filesystem.exists(dir))
            .last()
            .unwrap_or(strategy_dir)
            .to_path_buf()
    }

    /// Best-effort rollback of the directories this run created.
    fn rollback(&self, created_root: &Path) {
        if !self.filesystem.exists(created_root) {
            return;
        }
        if let Err(e) = self.filesystem.remove_dir_all(created_root) {
            warn!(
                error = %e,
                path = %created_root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}
