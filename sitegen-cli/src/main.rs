//! sitegen — render a topic list into a static HTML page.
//!
//! # Usage
//!
//! ```text
//! sitegen [ROOT]
//! ```
//!
//! Reads `ROOT/topics.json` and `ROOT/template.html`, writes
//! `ROOT/index.html`. `ROOT` defaults to the current directory.

mod commands;

use anyhow::Result;
use clap::Parser;

use commands::build::BuildArgs;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "sitegen",
    version,
    about = "Render topics.json into template.html, producing index.html",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    build: BuildArgs,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    cli.build.run()
}

/// Diagnostics go to stderr; stdout carries only the build summary.
fn init_tracing() {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}
