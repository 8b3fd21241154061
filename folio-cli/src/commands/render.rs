//! `folio render <template>` — render one template against a data file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use folio_core::data::DEFAULT_DATA_FILE;
use folio_sync::{render_single, write_output};

/// Arguments for `folio render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Embedded template name (e.g. `site.html`) or path to a template file.
    pub template: String,

    /// JSON data document.
    #[arg(long, short = 'd', default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Write the result here instead of stdout.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let rendered = render_single(&self.template, &self.data)
            .with_context(|| format!("failed to render '{}'", self.template))?;

        match self.output {
            Some(path) => {
                let result = write_output(&path, &rendered, false)
                    .with_context(|| format!("failed to write '{}'", path.display()))?;
                let verb = if result.is_change() { "wrote" } else { "unchanged" };
                println!("✓ {verb} {}", result.path().display());
            }
            None => print!("{rendered}"),
        }
        Ok(())
    }
}
