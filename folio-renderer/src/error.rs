//! Error types for folio-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from template loading and context construction.
///
/// Rendering itself never fails; missing data falls back per directive.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No template registered under this name.
    #[error("unknown template '{0}'")]
    UnknownTemplate(String),

    /// JSON serialization error (building the render context).
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem error while loading templates.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}
