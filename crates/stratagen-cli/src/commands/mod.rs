//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod make;

use std::path::Path;
use std::sync::Arc;

use stratagen_adapters::{LayeredStubs, LocalFilesystem, stubs::resolve_default_dir};
use stratagen_core::application::ports::Filesystem;
use stratagen_core::domain::ProjectLayout;

use crate::config::AppConfig;

/// Stub resolution for `layout`: project override, then the defaults
/// directory (env before config), then the bundled stubs.
pub(crate) fn project_stubs(
    layout: &ProjectLayout,
    config: &AppConfig,
    filesystem: Arc<dyn Filesystem>,
) -> LayeredStubs {
    let default_dir = resolve_default_dir(config.stubs.default_dir.clone());
    LayeredStubs::for_project(layout, default_dir, filesystem)
}

pub(crate) fn local_filesystem() -> Arc<dyn Filesystem> {
    Arc::new(LocalFilesystem::new())
}

/// `path` relative to `root` for display; unchanged when it is outside.
pub(crate) fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_display_strips_the_root() {
        assert_eq!(
            display_relative(Path::new("/p/app/Strategies/X/Contracts/XStrategyContract.php"), Path::new("/p")),
            "app/Strategies/X/Contracts/XStrategyContract.php"
        );
        assert_eq!(display_relative(Path::new("/elsewhere/a.php"), Path::new("/p")), "/elsewhere/a.php");
    }
}
