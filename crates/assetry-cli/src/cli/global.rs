//! Flags accepted before or after any `assetry` subcommand.

use clap::Args;
use std::path::PathBuf;

/// Flags shared by `generate`, `init`, `config` and `completions`.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more of the generation pipeline to stderr.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more detail to stderr (-v, -vv, -vvv)",
        long_help = "Log more of the generation pipeline to stderr:
    (none)  - Warnings and errors
    -v      - Catalog location and asset counts
    -vv     - Skipped entries and unreadable groups
    -vvv    - Every directory listing"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal; the generation summary is dropped.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors only, no generation summary"
    )]
    pub quiet: bool,

    /// Plain terminal output. Set implicitly by `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored summaries and error reports"
    )]
    pub no_color: bool,

    /// Settings file used instead of `.assetry.toml` and the user config.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of .assetry.toml"
    )]
    pub config: Option<PathBuf>,

    /// How results are printed; `json` emits the generation report.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Summary style: auto, human, plain or a JSON report"
    )]
    pub output_format: OutputFormat,
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Colored summary of the written file.
    Human,
    /// Same summary without ANSI codes.
    Plain,
    /// JSON report on stdout.
    Json,
}
