//! Build configuration — `folio.yaml`.
//!
//! ```yaml
//! data: personal-data.json
//! templates: templates        # optional override directory
//! targets:
//!   - name: website
//!     template: template.html
//!     output: index.html
//! ```
//!
//! Relative paths resolve against the directory holding the config file.
//! A missing config file is not an error: the default single `website`
//! target is used.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::DEFAULT_DATA_FILE;
use crate::error::ConfigError;

/// Conventional config file name.
pub const DEFAULT_CONFIG_FILE: &str = "folio.yaml";

/// One rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    /// Template name registered in the engine, or a path to a template file.
    pub template: String,
    pub output: PathBuf,
}

/// Parsed `folio.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_data")]
    pub data: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<PathBuf>,
    #[serde(default = "default_targets")]
    pub targets: Vec<Target>,
    /// Directory relative paths are resolved against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

fn default_data() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_targets() -> Vec<Target> {
    vec![Target {
        name: "website".to_string(),
        template: "template.html".to_string(),
        output: PathBuf::from("index.html"),
    }]
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            data: default_data(),
            templates: None,
            targets: default_targets(),
            base_dir: PathBuf::from("."),
        }
    }
}

impl BuildConfig {
    /// Load `path`, falling back to defaults rooted at its directory if absent.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let base_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", path.display());
                return Ok(BuildConfig { base_dir, ..Default::default() });
            }
            Err(source) => {
                return Err(ConfigError::Io { path: path.to_path_buf(), source });
            }
        };

        let mut config: BuildConfig = serde_yaml::from_str(&contents).map_err(|source| {
            ConfigError::Parse { path: path.to_path_buf(), source }
        })?;
        config.base_dir = base_dir;
        config.check_unique_targets()?;
        Ok(config)
    }

    fn check_unique_targets(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for target in &self.targets {
            if !seen.insert(target.name.as_str()) {
                return Err(ConfigError::DuplicateTarget(target.name.clone()));
            }
        }
        Ok(())
    }

    /// Absolute-or-base-relative path of the data document.
    pub fn data_path(&self) -> PathBuf {
        self.resolve(&self.data)
    }

    /// Template override directory, if configured.
    pub fn templates_dir(&self) -> Option<PathBuf> {
        self.templates.as_deref().map(|p| self.resolve(p))
    }

    /// Where `target`'s rendered output is written.
    pub fn output_path(&self, target: &Target) -> PathBuf {
        self.resolve(&target.output)
    }

    /// `target.template` interpreted as a file path.
    pub fn template_path(&self, target: &Target) -> PathBuf {
        self.resolve(Path::new(&target.template))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_default_website_target() {
        let dir = TempDir::new().unwrap();
        let config = BuildConfig::load(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config.targets.len(), 1);
        assert_eq!(config.targets[0].name, "website");
        assert_eq!(config.data_path(), dir.path().join("personal-data.json"));
        assert_eq!(
            config.output_path(&config.targets[0]),
            dir.path().join("index.html")
        );
    }

    #[test]
    fn bare_file_name_resolves_against_current_dir() {
        let config = BuildConfig::load(Path::new("does-not-exist-folio.yaml")).unwrap();
        assert_eq!(config.base_dir, PathBuf::from("."));
    }

    #[test]
    fn duplicate_target_names_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(
            &path,
            "targets:\n  - { name: a, template: x.html, output: x.out }\n  - { name: a, template: y.html, output: y.out }\n",
        )
        .unwrap();
        let err = BuildConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateTarget(name) if name == "a"));
    }

    #[test]
    fn absolute_paths_are_kept() {
        let config = BuildConfig {
            data: PathBuf::from("/srv/data.json"),
            ..Default::default()
        };
        assert_eq!(config.data_path(), PathBuf::from("/srv/data.json"));
    }
}
