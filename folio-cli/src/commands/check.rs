//! `folio check` — validate the data document and summarise it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use folio_core::{data::DEFAULT_DATA_FILE, DataDocument, DataSummary, ValidationError};

/// Arguments for `folio check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON data document.
    #[arg(long, short = 'd', default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CheckReportJson<'a> {
    data: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a DataSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Tabled)]
struct SectionRow {
    #[tabled(rename = "section")]
    section: String,
    #[tabled(rename = "entries")]
    entries: usize,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let doc = DataDocument::load(&self.data)
            .with_context(|| format!("cannot read '{}'", self.data.display()))?;
        let outcome = doc.summary();

        if self.json {
            print_json(&self.data, &outcome)?;
        } else if let Ok(summary) = &outcome {
            print_table(&self.data, summary);
        }

        outcome
            .map(|_| ())
            .with_context(|| format!("'{}' is not a valid data file", self.data.display()))
    }
}

fn print_json(path: &Path, outcome: &Result<DataSummary, ValidationError>) -> Result<()> {
    let report = match outcome {
        Ok(summary) => CheckReportJson {
            data: path.display().to_string(),
            valid: true,
            summary: Some(summary),
            missing: Vec::new(),
            error: None,
        },
        Err(err) => CheckReportJson {
            data: path.display().to_string(),
            valid: false,
            summary: None,
            missing: match err {
                ValidationError::MissingSections(missing) => missing.clone(),
                ValidationError::Schema(_) => Vec::new(),
            },
            error: Some(err.to_string()),
        },
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_table(path: &Path, summary: &DataSummary) {
    println!(
        "{} {} is valid ({})",
        "✓".green(),
        path.display(),
        summary.name.bold()
    );
    let rows: Vec<SectionRow> = summary
        .sections
        .iter()
        .map(|s| SectionRow {
            section: s.section.clone(),
            entries: s.entries,
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}
