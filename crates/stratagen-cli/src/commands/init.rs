//! `stratagen init` - create a default configuration file.

use std::path::PathBuf;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompt::can_confirm,
};

/// Create a default stratagen configuration file.
pub fn execute(
    args: InitArgs,
    _global: GlobalArgs,
    _config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let config_path = target_path(args.local);

    if config_path.exists() && !args.force {
        if !can_confirm() {
            output.warning(&format!(
                "Config already exists at {}  (use --force to overwrite)",
                config_path.display(),
            ))?;
            return Ok(());
        }
        if !confirm_overwrite(&config_path)? {
            return Err(CliError::Cancelled);
        }
    }

    output.info("Initialising configuration...")?;

    let toml = toml::to_string_pretty(&AppConfig::default())
        .with_cli_context(|| "Failed to serialise default config")?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

fn target_path(local: bool) -> PathBuf {
    if local {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::config_path()
    }
}

#[cfg(feature = "interactive")]
fn confirm_overwrite(path: &std::path::Path) -> CliResult<bool> {
    dialoguer::Confirm::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .with_prompt(format!("Overwrite {}?", path.display()))
        .default(false)
        .interact_on(&console::Term::stderr())
        .map_err(|e| CliError::InvalidInput {
            message: format!("Failed to read confirmation: {e}"),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm_overwrite(_path: &std::path::Path) -> CliResult<bool> {
    Ok(false)
}
