//! Where generated files go and how their namespaces are derived.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    artifact::StubId, common::RelativePath, error::DomainError, strategy::StrategyName,
};

/// Directory below the application source directory that holds strategies.
pub const STRATEGIES_DIR: &str = "Strategies";

/// Separator used by the generated language's namespaces.
pub const NAMESPACE_SEPARATOR: &str = "\\";

/// Directory below the project root that holds stub overrides.
pub const STUBS_DIR: &str = "stubs";

/// Project layout for generated sources.
///
/// Defaults match a Laravel application: sources under `app/`, root
/// namespace `App`, PHP files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLayout {
    root: PathBuf,
    app_dir: PathBuf,
    root_namespace: String,
    stub_namespace: String,
    extension: String,
}

impl ProjectLayout {
    pub const DEFAULT_APP_DIR: &'static str = "app";
    pub const DEFAULT_ROOT_NAMESPACE: &'static str = "App";
    pub const DEFAULT_STUB_NAMESPACE: &'static str = "laravel-strategy";
    pub const DEFAULT_EXTENSION: &'static str = "php";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            app_dir: PathBuf::from(Self::DEFAULT_APP_DIR),
            root_namespace: Self::DEFAULT_ROOT_NAMESPACE.into(),
            stub_namespace: Self::DEFAULT_STUB_NAMESPACE.into(),
            extension: Self::DEFAULT_EXTENSION.into(),
        }
    }

    pub fn with_app_dir(mut self, app_dir: impl Into<PathBuf>) -> Self {
        self.app_dir = app_dir.into();
        self
    }

    /// Surrounding namespace separators are ignored.
    pub fn with_root_namespace(mut self, namespace: impl AsRef<str>) -> Self {
        self.root_namespace = namespace.as_ref().trim_matches('\\').to_owned();
        self
    }

    pub fn with_stub_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.stub_namespace = namespace.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn root_namespace(&self) -> &str {
        &self.root_namespace
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Absolute (or root-relative) path of the application source directory.
    pub fn app_root(&self) -> PathBuf {
        self.root.join(&self.app_dir)
    }

    /// Resolve a destination below the application source directory.
    pub fn app_path(&self, relative: &RelativePath) -> PathBuf {
        self.app_root().join(relative.as_path())
    }

    /// `Strategies/<class>`; the unit the collision guard checks.
    ///
    /// Leading segments of a nested name do not nest the directory.
    pub fn strategy_dir(&self, name: &StrategyName) -> Result<RelativePath, DomainError> {
        RelativePath::try_new(STRATEGIES_DIR)?.join(name.class_name())
    }

    /// `<root>/stubs/<stub-namespace>`
    pub fn override_dir(&self) -> PathBuf {
        self.root.join(STUBS_DIR).join(&self.stub_namespace)
    }

    /// `<root>/stubs/<stub-namespace>/<id>.stub`
    pub fn override_stub_path(&self, id: StubId) -> PathBuf {
        self.override_dir().join(id.file_name())
    }

    /// Namespace of a file: its directory segments behind the root namespace.
    ///
    /// `Strategies/PaymentMethod/Contracts/X.php` → `App\Strategies\PaymentMethod\Contracts`
    pub fn namespace_for(&self, destination: &RelativePath) -> String {
        let mut segments = destination.segments();
        segments.pop();
        self.qualify(segments)
    }

    /// `App\Strategies\<class>`
    pub fn strategy_namespace(&self, name: &StrategyName) -> String {
        self.qualify(vec![STRATEGIES_DIR.to_owned(), name.class_name().to_owned()])
    }

    fn qualify(&self, segments: Vec<String>) -> String {
        let prefix = (!self.root_namespace.is_empty()).then(|| self.root_namespace.clone());
        prefix
            .into_iter()
            .chain(segments)
            .collect::<Vec<_>>()
            .join(NAMESPACE_SEPARATOR)
    }
}
