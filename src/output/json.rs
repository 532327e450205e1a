//! Machine-readable report output.

use serde::Serialize;

use super::formatter::OutputFormatter;
use crate::analyzer::Arm64Analysis;
use crate::report::{AnalysisReport, MigrationSummary};

/// Document layout: the summary first, then one object per verdict.
#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a MigrationSummary,
    resources: &'a [Arm64Analysis],
}

/// Formatter that outputs the report as pretty-printed JSON.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &AnalysisReport) -> String {
        let document = JsonReport {
            summary: &report.summary,
            resources: &report.analyses,
        };

        serde_json::to_string_pretty(&document).expect("JSON serialization should not fail")
    }
}
