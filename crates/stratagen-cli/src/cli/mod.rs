//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stratagen",
    bin_name = "stratagen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Strategy pattern scaffolding for PHP projects",
    long_about = "Strategy pattern scaffolding for PHP projects.\n\n\
                  stratagen asks for a strategy name, its methods and its concrete \
                  implementations, then writes a contract, one class per \
                  implementation, a factory and an optional pipeline under \
                  app/Strategies/<class>.",
    after_help = "EXAMPLES:\n\
        \x20 stratagen make PaymentMethod\n\
        \x20 stratagen make Billing/PaymentMethod --project-root ../shop\n\
        \x20 stratagen list\n\
        \x20 stratagen completions bash > /usr/share/bash-completion/completions/stratagen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a strategy.
    #[command(
        visible_alias = "m",
        about = "Generate a new strategy",
        after_help = "EXAMPLES:\n\
            \x20 stratagen make                       # asks for the name\n\
            \x20 stratagen make PaymentMethod\n\
            \x20 stratagen make PaymentMethod --dry-run\n\
            \x20 stratagen make PaymentMethod --strict  # exit 2 if it exists"
    )]
    Make(MakeArgs),

    /// Show where each stub is loaded from.
    #[command(
        visible_alias = "ls",
        about = "List stubs and where they resolve",
        after_help = "EXAMPLES:\n\
            \x20 stratagen list\n\
            \x20 stratagen list --format json"
    )]
    List(ListArgs),

    /// Initialise a stratagen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stratagen init          # user config location\n\
            \x20 stratagen init --local  # ./.stratagen.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stratagen completions bash > ~/.local/share/bash-completion/completions/stratagen\n\
            \x20 stratagen completions zsh  > ~/.zfunc/_stratagen\n\
            \x20 stratagen completions fish > ~/.config/fish/completions/stratagen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the stratagen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stratagen config get project.root_namespace\n\
            \x20 stratagen config list\n\
            \x20 stratagen config path"
    )]
    Config(ConfigCommands),
}

// ── make ──────────────────────────────────────────────────────────────────────

/// Arguments for `stratagen make`.
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Strategy name, optionally nested with `/` or `\`.
    #[arg(value_name = "NAME", help = "Strategy name (asked for when omitted)")]
    pub name: Option<String>,

    /// Project root; sources go under `<root>/<app-dir>`.
    #[arg(
        short = 'r',
        long = "project-root",
        value_name = "DIR",
        default_value = ".",
        help = "Project root directory"
    )]
    pub project_root: PathBuf,

    /// Treat an existing strategy as an error.
    #[arg(long = "strict", help = "Exit with an error if the strategy already exists")]
    pub strict: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `stratagen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Project root whose `stubs/` overrides are inspected.
    #[arg(
        short = 'r',
        long = "project-root",
        value_name = "DIR",
        default_value = ".",
        help = "Project root directory"
    )]
    pub project_root: PathBuf,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One stub file name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stratagen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.stratagen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stratagen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stratagen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `project.app_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
