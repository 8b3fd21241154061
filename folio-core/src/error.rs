//! Error types for folio-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a data document.
#[derive(Debug, Error)]
pub enum DataError {
    /// The data file did not exist at the expected path.
    #[error("data file not found at {path}")]
    NotFound { path: PathBuf },

    /// Underlying I/O failure other than a missing file.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parse error: serde_json reports line and column.
    #[error("failed to parse data file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while checking a data document against the CV schema.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more required top-level sections are absent.
    #[error("missing required sections: {}", .0.join(", "))]
    MissingSections(Vec<String>),

    /// The document has every section but one of them has the wrong shape.
    #[error("data does not match the CV schema: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Errors raised while loading `folio.yaml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error: includes file path and line context from serde_yaml.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Two targets share a name.
    #[error("duplicate target name '{0}'")]
    DuplicateTarget(String),
}
