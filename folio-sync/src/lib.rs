//! # folio-sync
//!
//! Renders configured targets and writes them to disk.
//!
//! Call [`build`] to render and write every target in a [`BuildConfig`],
//! [`diff_targets`] to preview pending changes, or [`render_single`] to render
//! one template without touching the filesystem.
//!
//! [`BuildConfig`]: folio_core::BuildConfig

pub mod diff;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use diff::{diff_targets, FileDiff};
pub use error::SyncError;
pub use pipeline::{build, render_single, render_targets, BuildReport, RenderedTarget, TargetResult};
pub use writer::{write_output, WriteResult};
