//! Output generation.
//!
//! This module renders an [`AnalysisReport`] in the selected format and
//! writes it to stdout.

pub mod formatter;
pub mod json;
pub mod text;

use std::io::{self, Write};

use thiserror::Error;

use crate::cli::OutputFormat;
use crate::report::AnalysisReport;
use formatter::create_formatter;

/// Errors that can occur during output generation.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes analysis reports to stdout.
pub struct OutputWriter {
    format: OutputFormat,
    no_color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat, no_color: bool) -> Self {
        Self { format, no_color }
    }

    /// Renders the report. Exposed separately from [`write`](Self::write)
    /// so the rendered text can be inspected.
    pub fn render(&self, report: &AnalysisReport) -> String {
        create_formatter(self.format, !self.no_color).format(report)
    }

    /// Writes the rendered report followed by a newline to `out`.
    pub fn write_to(&self, out: &mut impl Write, report: &AnalysisReport) -> Result<(), OutputError> {
        writeln!(out, "{}", self.render(report))?;
        out.flush()?;
        Ok(())
    }

    /// Writes the rendered report to stdout.
    pub fn write(&self, report: &AnalysisReport) -> Result<(), OutputError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle, report)
    }
}
