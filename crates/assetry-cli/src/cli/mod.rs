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
    name    = "assetry",
    bin_name = "assetry",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Type-safe Swift accessors for Xcode asset catalogs",
    long_about = "Assetry scans an Assets.xcassets catalog and generates Swift \
                  enums for every image set and color set it contains.",
    after_help = "EXAMPLES:\n\
        \x20 assetry generate --dir ./MyApp\n\
        \x20 assetry generate --dir ./MyApp --output MyApp/Generated/Assets.swift\n\
        \x20 assetry generate --dir . --dry-run\n\
        \x20 assetry completions bash > /usr/share/bash-completion/completions/assetry",
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
    /// Generate the Swift asset file.
    #[command(
        visible_alias = "gen",
        about = "Generate Swift code from an asset catalog",
        after_help = "EXAMPLES:\n\
            \x20 assetry generate --dir ./MyApp\n\
            \x20 assetry gen --dir . --namespace assets --names '^[a-z]+$'\n\
            \x20 assetry gen --dir . --shell /bin/zsh"
    )]
    Generate(GenerateArgs),

    /// Initialise an Assetry configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 assetry init           # platform config location\n\
            \x20 assetry init --local   # .assetry.toml in CWD\n\
            \x20 assetry init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 assetry completions bash > ~/.local/share/bash-completion/completions/assetry\n\
            \x20 assetry completions zsh  > ~/.zfunc/_assetry\n\
            \x20 assetry completions fish > ~/.config/fish/completions/assetry.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Assetry configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 assetry config get generator.namespace\n\
            \x20 assetry config list\n\
            \x20 assetry config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `assetry generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Directory searched for the asset catalog.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Directory to search for the asset catalog"
    )]
    pub dir: Option<PathBuf>,

    /// Where the generated Swift file is written.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file (default: ./Assets.swift)"
    )]
    pub output: Option<PathBuf>,

    /// Regex a directory name must match to become a group.
    #[arg(
        short = 'n',
        long = "names",
        value_name = "REGEX",
        help = "Allowed group/asset name pattern (default: ^[a-zA-Z0-9_]+$)"
    )]
    pub names: Option<String>,

    /// Locate the catalog with `find` run through this shell.
    #[arg(
        long = "shell",
        value_name = "PATH",
        help = "Shell used to locate the catalog (default: in-process walk)"
    )]
    pub shell: Option<PathBuf>,

    /// Name of the generated root enums.
    #[arg(
        long = "namespace",
        value_name = "NAME",
        help = "Root enum name (default: app)"
    )]
    pub namespace: Option<String>,

    /// Catalog directory name.
    #[arg(
        long = "catalog",
        value_name = "NAME",
        help = "Asset catalog directory name (default: Assets.xcassets)"
    )]
    pub catalog: Option<String>,

    /// Print the generated source instead of writing it.
    #[arg(long = "dry-run", help = "Print the generated source without writing")]
    pub dry_run: bool,

    /// Also print the generated source after writing it.
    #[arg(long = "stdout", help = "Print the generated source to stdout")]
    pub stdout: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `assetry init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.assetry.toml` in the current directory.
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

/// Arguments for `assetry completions`.
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

/// Subcommands for `assetry config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generator.namespace`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
