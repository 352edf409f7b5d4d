//! Report flow - load a posts CSV, count posts per author, print the top K

use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

use crate::core::error::{TallyError, TallyResult};
use crate::core::header::DEFAULT_COLUMN;
use crate::core::loader::load_csv;
use crate::core::model::Report;
use crate::core::render::{RenderConfig, Renderer};
use crate::flows::tally::aggregate;
use crate::flows::top::{top_k, DEFAULT_TOP};

/// Options for a single report run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// CSV file to read
    pub path: PathBuf,
    /// Header column holding the author
    pub column: String,
    /// How many authors to report
    pub top: usize,
    /// Print the run summary to stderr
    pub summary: bool,
    pub render: RenderConfig,
}

impl ReportConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            column: DEFAULT_COLUMN.to_string(),
            top: DEFAULT_TOP,
            summary: false,
            render: RenderConfig::default(),
        }
    }
}

/// Build the ranking without printing anything
pub fn build_report(config: &ReportConfig) -> TallyResult<Report> {
    if config.top == 0 {
        return Err(TallyError::InvalidTop);
    }

    let loaded = load_csv(&config.path, &config.column)?;
    let tally = aggregate(&loaded.lines, loaded.metadata.name_offset)?;

    Ok(Report {
        metadata: loaded.metadata,
        entries: top_k(&tally, config.top),
        counted: tally.total(),
        skipped: tally.skipped(),
        authors: tally.len(),
        lossy: loaded.lossy,
    })
}

/// Run the report and write it to stdout
pub fn run_report(config: &ReportConfig) -> Result<()> {
    let report = build_report(config)
        .with_context(|| format!("failed to rank authors in {}", config.path.display()))?;

    let stdout = std::io::stdout();
    Renderer::with_config(config.render)
        .render_to(&report.entries, stdout.lock())
        .context("failed to write report")?;

    if config.summary {
        writeln!(std::io::stderr(), "{}", report.summary_line())?;
    }

    Ok(())
}
