//! Output formatter trait and factory.
//!
//! This module defines the `OutputFormatter` trait that all formatters implement,
//! and provides a factory function to create the appropriate formatter based on
//! the output format configuration.

use crate::cli::OutputFormat;
use crate::report::AnalysisReport;

/// Trait for rendering an analysis report.
pub trait OutputFormatter {
    /// Formats the whole report into a string, without a trailing newline.
    fn format(&self, report: &AnalysisReport) -> String;
}

/// Creates the appropriate formatter for the given output format.
///
/// `colored` only affects text output; JSON is never colored.
pub fn create_formatter(format: OutputFormat, colored: bool) -> Box<dyn OutputFormatter> {
    use super::json::JsonFormatter;
    use super::text::TextFormatter;

    match format {
        OutputFormat::Text => Box::new(TextFormatter { colored }),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
