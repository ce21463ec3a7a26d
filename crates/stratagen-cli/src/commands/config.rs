//! `stratagen config` - inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Keys accepted by `stratagen config get`.
pub const KEYS: [&str; 6] = [
    "project.app_dir",
    "project.root_namespace",
    "stubs.namespace",
    "stubs.default_dir",
    "output.no_color",
    "output.format",
];

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value:?}"))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised = toml::to_string_pretty(&config)
                    .with_cli_context(|| "Failed to serialise config")?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "project.app_dir" => Ok(config.project.app_dir.clone()),
        "project.root_namespace" => Ok(config.project.root_namespace.clone()),
        "stubs.namespace" => Ok(config.stubs.namespace.clone()),
        "stubs.default_dir" => Ok(config
            .stubs
            .default_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}' (known: {})", KEYS.join(", ")),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
