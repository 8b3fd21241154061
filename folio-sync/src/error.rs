//! Error types for folio-sync.

use std::path::PathBuf;

use thiserror::Error;

use folio_core::{ConfigError, DataError};
use folio_renderer::RenderError;

/// All errors that can arise from build operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from the template engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// The data document could not be loaded.
    #[error("data error: {0}")]
    Data(#[from] DataError),

    /// The build configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
