//! Folio core library — data document loading, CV schema, build config, errors.
//!
//! Public API surface:
//! - [`data`] — load `personal-data.json` and validate its shape
//! - [`types`] — typed CV schema used for validation and summaries
//! - [`config`] — `folio.yaml` build targets
//! - [`error`] — [`DataError`], [`ConfigError`], [`ValidationError`]

pub mod config;
pub mod data;
pub mod error;
pub mod types;

pub use config::{BuildConfig, Target};
pub use data::{DataDocument, DataSummary};
pub use error::{ConfigError, DataError, ValidationError};
pub use types::PersonalData;
