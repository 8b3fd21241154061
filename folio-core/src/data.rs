//! Data document loading and validation.
//!
//! The document is kept as a raw [`serde_json::Value`] tree so templates can
//! reach any field, including ones the typed schema does not know about.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DataError, ValidationError};
use crate::types::PersonalData;

/// Conventional data file name, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "personal-data.json";

/// A parsed data document and the path it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct DataDocument {
    pub path: PathBuf,
    pub value: Value,
}

/// Entry counts per section, for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataSummary {
    pub name: String,
    pub sections: Vec<SectionCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionCount {
    pub section: String,
    pub entries: usize,
}

impl DataDocument {
    /// Read and parse a JSON data file.
    ///
    /// Returns `DataError::NotFound` if absent and `DataError::Parse` (with
    /// line and column) if the JSON is malformed.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(DataError::NotFound { path: path.to_path_buf() });
            }
            Err(source) => {
                return Err(DataError::Io { path: path.to_path_buf(), source });
            }
        };
        let doc = Self::parse(path, &contents)?;
        tracing::debug!("loaded data document {}", path.display());
        Ok(doc)
    }

    /// Parse JSON text that was read from `path`.
    pub fn parse(path: &Path, contents: &str) -> Result<Self, DataError> {
        let value = serde_json::from_str(contents).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(DataDocument { path: path.to_path_buf(), value })
    }

    /// Required sections that are absent or `null`, in declaration order.
    pub fn missing_sections(&self) -> Vec<String> {
        PersonalData::REQUIRED_SECTIONS
            .iter()
            .filter(|key| self.value.get(**key).map_or(true, Value::is_null))
            .map(|key| (*key).to_string())
            .collect()
    }

    /// Check the document against the CV schema.
    ///
    /// All missing sections are reported together before any shape check.
    pub fn validate(&self) -> Result<PersonalData, ValidationError> {
        let missing = self.missing_sections();
        if !missing.is_empty() {
            return Err(ValidationError::MissingSections(missing));
        }
        Ok(PersonalData::deserialize(&self.value)?)
    }

    /// Validate and count the entries of every section.
    pub fn summary(&self) -> Result<DataSummary, ValidationError> {
        let data = self.validate()?;
        let count = |section: &str, entries: usize| SectionCount {
            section: section.to_string(),
            entries,
        };
        Ok(DataSummary {
            name: data.personal_info.name.clone(),
            sections: vec![
                count("contactInfo", data.contact_info.len()),
                count("socialLinks", data.social_links.len()),
                count("experienceTabs", data.experience_tabs.len()),
                count("experience entries", data.experience_count()),
                count("education", data.education.len()),
                count("skills", data.skills.len()),
                count("projects", data.projects.len()),
            ],
        })
    }
}
