//! Tracing subscriber initialisation.
//!
//! Only the CLI crate calls [`init_logging`]; `assetry-core` and
//! `assetry-adapters` only *emit* spans and events.
//!
//! Everything goes to stderr so `generate --stdout` output stays clean.
//!
//! | Flag(s)   | Level | What shows up                               |
//! |-----------|-------|---------------------------------------------|
//! | (none)    | WARN  | warnings only                               |
//! | `-v`      | INFO  | catalog path, image/color counts, write     |
//! | `-vv`     | DEBUG | skipped entries, unreadable nested groups   |
//! | `-vvv`    | TRACE | every directory listing                     |
//! | `--quiet` | ERROR | failures only                               |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
/// Returns an error if a subscriber is already registered in this process.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    // RUST_LOG wins over -v/-q.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level)));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// One directive per workspace crate, all at `level`.
fn filter_directives(level: &str) -> String {
    format!("assetry={level},assetry_core={level},assetry_adapters={level}")
}

/// Translate the verbosity counter + quiet flag to a level string.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
