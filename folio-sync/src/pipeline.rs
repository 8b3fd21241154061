//! Build pipeline: load data once, render every target, then write.
//!
//! Every target is rendered before any file is written, so a data or
//! template error leaves the outputs untouched. A write error on one target
//! does not roll back targets already written.

use std::path::{Path, PathBuf};

use folio_core::{BuildConfig, DataDocument, Target};
use folio_renderer::{TemplateContext, TemplateEngine};

use crate::writer::{write_output, WriteResult};
use crate::SyncError;

/// A target rendered in memory, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTarget {
    pub name: String,
    pub output: PathBuf,
    pub content: String,
}

/// Outcome of writing one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetResult {
    pub name: String,
    pub write: WriteResult,
}

/// Outcome of a full build, in config order.
#[derive(Debug)]
pub struct BuildReport {
    pub data_path: PathBuf,
    pub targets: Vec<TargetResult>,
}

/// Build an engine that knows every template `config` refers to.
///
/// Names already registered (embedded or from the templates directory) win;
/// any other target template is read from its config-relative path.
fn engine_for(config: &BuildConfig) -> Result<TemplateEngine, SyncError> {
    let templates_dir = config.templates_dir();
    let mut engine = TemplateEngine::new(templates_dir.as_deref())?;
    for target in &config.targets {
        if !engine.has_template(&target.template) {
            engine.add_template_file(&target.template, &config.template_path(target))?;
        }
    }
    Ok(engine)
}

fn render_target(
    engine: &TemplateEngine,
    config: &BuildConfig,
    target: &Target,
    ctx: &TemplateContext,
) -> Result<RenderedTarget, SyncError> {
    let content = engine.render(&target.template, ctx)?;
    tracing::debug!("rendered target '{}' ({} bytes)", target.name, content.len());
    Ok(RenderedTarget {
        name: target.name.clone(),
        output: config.output_path(target),
        content,
    })
}

/// Render every target in `config` without writing anything.
pub fn render_targets(config: &BuildConfig) -> Result<Vec<RenderedTarget>, SyncError> {
    let data = DataDocument::load(&config.data_path())?;
    let engine = engine_for(config)?;
    let ctx = TemplateContext::new(data.value);
    config
        .targets
        .iter()
        .map(|target| render_target(&engine, config, target, &ctx))
        .collect()
}

/// Render and write every target in `config`.
pub fn build(config: &BuildConfig, dry_run: bool) -> Result<BuildReport, SyncError> {
    let rendered = render_targets(config)?;
    let mut targets = Vec::with_capacity(rendered.len());
    for target in rendered {
        let write = write_output(&target.output, &target.content, dry_run)?;
        targets.push(TargetResult {
            name: target.name,
            write,
        });
    }
    Ok(BuildReport {
        data_path: config.data_path(),
        targets,
    })
}

/// Render one template (an embedded name or a file path) against a data file.
pub fn render_single(template: &str, data_path: &Path) -> Result<String, SyncError> {
    let data = DataDocument::load(data_path)?;
    let mut engine = TemplateEngine::new(None)?;
    if !engine.has_template(template) {
        engine.add_template_file(template, Path::new(template))?;
    }
    Ok(engine.render(template, &TemplateContext::new(data.value))?)
}
