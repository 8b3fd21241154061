//! `folio build` — render and write every configured target.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use folio_core::{config::DEFAULT_CONFIG_FILE, BuildConfig};
use folio_sync::{build, TargetResult, WriteResult};

/// Arguments for `folio build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Build configuration file; defaults apply when it does not exist.
    #[arg(long, short = 'c', default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

impl BuildArgs {
    pub fn run(self) -> Result<()> {
        let config = BuildConfig::load(&self.config)
            .with_context(|| format!("failed to load '{}'", self.config.display()))?;
        let report = build(&config, self.dry_run).context("build failed")?;
        print_results(&report.targets, self.dry_run);
        Ok(())
    }
}

fn print_results(targets: &[TargetResult], dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let changed = targets.iter().filter(|t| t.write.is_change()).count();
    let unchanged = targets.len() - changed;

    println!(
        "{prefix}{} built {} target(s) ({} written, {} unchanged)",
        "✓".green(),
        targets.len(),
        changed,
        unchanged
    );

    for t in targets {
        let path = t.write.path().display();
        match &t.write {
            WriteResult::Written { .. } => println!("  ✎  {} → {path}", t.name),
            WriteResult::WouldWrite { .. } => println!("  ~  {} → {path}", t.name),
            WriteResult::Unchanged { .. } => println!("  ·  {} → {path}", t.name.dimmed()),
        }
    }
}
