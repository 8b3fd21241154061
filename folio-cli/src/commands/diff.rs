//! `folio diff` — show unified diffs for what build would write.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use folio_core::{config::DEFAULT_CONFIG_FILE, BuildConfig};
use folio_sync::diff_targets;

/// Arguments for `folio diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Build configuration file; defaults apply when it does not exist.
    #[arg(long, short = 'c', default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let config = BuildConfig::load(&self.config)
            .with_context(|| format!("failed to load '{}'", self.config.display()))?;
        let diffs = diff_targets(&config).context("diff failed")?;

        if diffs.is_empty() {
            println!("No differences.");
            return Ok(());
        }

        for diff in diffs {
            print!("{}", diff.unified_diff);
            if !diff.unified_diff.ends_with('\n') {
                println!();
            }
        }

        Ok(())
    }
}
