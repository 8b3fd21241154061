//! Folio — render a portfolio site from a personal data document.
//!
//! # Usage
//!
//! ```text
//! folio render <template> [--data personal-data.json] [--output FILE]
//! folio build [--config folio.yaml] [--dry-run]
//! folio diff [--config folio.yaml]
//! folio check [--data personal-data.json] [--json]
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{build::BuildArgs, check::CheckArgs, diff::DiffArgs, render::RenderArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "Render a portfolio website from a personal data file",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a single template and print or save the result.
    Render(RenderArgs),

    /// Render and write every target in the build config.
    Build(BuildArgs),

    /// Show a unified diff of what build would write.
    Diff(DiffArgs),

    /// Validate the data file and summarise its sections.
    Check(CheckArgs),
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => args.run(),
        Commands::Build(args) => args.run(),
        Commands::Diff(args) => args.run(),
        Commands::Check(args) => args.run(),
    }
}
