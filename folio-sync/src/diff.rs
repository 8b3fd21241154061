//! Unified diff preview for `folio diff`.

use std::path::PathBuf;

use similar::TextDiff;

use folio_core::BuildConfig;

use crate::pipeline::render_targets;
use crate::writer::{normalize_line_endings, read_existing};
use crate::SyncError;

/// A single rendered file diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub target: String,
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Render every target and compare it to current on-disk content.
///
/// Targets whose output is already up to date are omitted. No files are written.
pub fn diff_targets(config: &BuildConfig) -> Result<Vec<FileDiff>, SyncError> {
    let mut diffs = Vec::new();
    for target in render_targets(config)? {
        let rendered = normalize_line_endings(&target.content);
        let existing = read_existing(&target.output)?;
        if existing.as_deref() == Some(rendered.as_str()) {
            continue;
        }
        let existing = existing.unwrap_or_default();

        let relative = target
            .output
            .strip_prefix(&config.base_dir)
            .unwrap_or(target.output.as_path());
        let old_header = format!("a/{}", relative.display());
        let new_header = format!("b/{}", relative.display());
        let unified = TextDiff::from_lines(&existing, &rendered)
            .unified_diff()
            .header(&old_header, &new_header)
            .context_radius(3)
            .to_string();
        // A new empty file has no hunks; keep the headers so it still shows.
        let unified = if unified.is_empty() {
            format!("--- {old_header}\n+++ {new_header}\n")
        } else {
            unified
        };

        diffs.push(FileDiff {
            target: target.name,
            path: target.output,
            unified_diff: unified,
        });
    }
    Ok(diffs)
}
