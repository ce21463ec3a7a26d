//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`ProjectLayout`]
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STRATAGEN_<SECTION>__<KEY>`, e.g.
//!    `STRATAGEN_PROJECT__ROOT_NAMESPACE=Domain`
//! 3. Config file: `--config FILE` (must exist), otherwise the user config
//!    file and then `./.stratagen.toml`, both optional
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use stratagen_core::domain::ProjectLayout;

/// Config file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = ".stratagen.toml";

const ENV_PREFIX: &str = "STRATAGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where generated sources go.
    pub project: ProjectConfig,
    /// Stub lookup.
    pub stubs: StubsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Source directory below the project root.
    pub app_dir: String,
    /// Namespace that `app_dir` maps to.
    pub root_namespace: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StubsConfig {
    /// Override directory name under `<root>/stubs/`.
    pub namespace: String,
    /// Replaces the built-in stubs when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            app_dir: ProjectLayout::DEFAULT_APP_DIR.into(),
            root_namespace: ProjectLayout::DEFAULT_ROOT_NAMESPACE.into(),
        }
    }
}

impl Default for StubsConfig {
    fn default() -> Self {
        Self {
            namespace: ProjectLayout::DEFAULT_STUB_NAMESPACE.into(),
            default_dir: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file(s), then environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist.
    /// Without it the user config file and `./.stratagen.toml` are read
    /// when present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_with(config_file, Self::environment())
    }

    fn load_with(config_file: Option<&PathBuf>, env: Environment) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("project.app_dir", defaults.project.app_dir)?
            .set_default("project.root_namespace", defaults.project.root_namespace)?
            .set_default("stubs.namespace", defaults.stubs.namespace)?
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?;

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path.as_path()).required(true)),
            None => builder
                .add_source(File::from(Self::config_path()).required(false))
                .add_source(File::from(Path::new(LOCAL_CONFIG_FILE)).required(false)),
        };

        let config = builder
            .add_source(env)
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Invalid configuration values")
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stratagen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stratagen", "stratagen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The layout for a project rooted at `root`.
    pub fn layout(&self, root: impl Into<PathBuf>) -> ProjectLayout {
        ProjectLayout::new(root)
            .with_app_dir(&self.project.app_dir)
            .with_root_namespace(&self.project.root_namespace)
            .with_stub_namespace(self.stubs.namespace.clone())
    }
}
