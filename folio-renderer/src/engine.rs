//! Named-template registry — [`TemplateEngine`].
//!
//! Templates are looked up by name. The engine starts with the embedded
//! templates below and can be extended with a user directory (files override
//! embedded templates of the same name) or individual files.
//!
//! | Name        | Purpose                              |
//! |-------------|--------------------------------------|
//! | `site.html` | Single-page portfolio website        |

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::context::TemplateContext;
use crate::error::RenderError;
use crate::eval::Template;

// ---------------------------------------------------------------------------
// Embedded templates: baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[("site.html", include_str!("templates/site.html"))];

/// File extensions picked up from a user template directory.
const TEMPLATE_EXTENSIONS: &[&str] = &["html", "htm", "md", "txt"];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(name: &str) -> String {
    name.replace('\\', "/").to_lowercase()
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        let is_template = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| TEMPLATE_EXTENSIONS.contains(&ext));
        if !is_template {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(&rel.to_string_lossy());
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Registry of named templates.
///
/// Names are normalised to lowercase with `/` separators. Rendering reparses
/// the template on every call; nothing is cached between renders.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    templates: BTreeMap<String, String>,
}

impl TemplateEngine {
    /// Construct an engine with the embedded templates plus any overrides
    /// found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let mut engine = TemplateEngine { templates: BTreeMap::new() };
        for (name, content) in TPLS {
            engine.add_raw_template(*name, *content);
        }
        if let Some(dir) = user_template_dir {
            for (name, content) in load_user_templates(dir)? {
                tracing::debug!("loaded template '{name}' from {}", dir.display());
                engine.templates.insert(name, content);
            }
        }
        Ok(engine)
    }

    /// Register (or replace) a template under `name`.
    pub fn add_raw_template(&mut self, name: impl AsRef<str>, content: impl Into<String>) {
        self.templates
            .insert(normalize_template_name(name.as_ref()), content.into());
    }

    /// Read `path` and register it under `name`.
    pub fn add_template_file(&mut self, name: &str, path: &Path) -> Result<(), RenderError> {
        let content = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
        self.add_raw_template(name, content);
        Ok(())
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.templates.contains_key(&normalize_template_name(name))
    }

    /// Registered names in sorted order.
    pub fn template_names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Render the template registered as `name`.
    pub fn render(&self, name: &str, ctx: &TemplateContext) -> Result<String, RenderError> {
        let source = self
            .templates
            .get(&normalize_template_name(name))
            .ok_or_else(|| RenderError::UnknownTemplate(name.to_string()))?;
        Ok(Template::parse(source).render(ctx.root()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
