//! Human-readable report output.

use std::fmt::Write;

use colored::Colorize;

use super::formatter::OutputFormatter;
use crate::analyzer::Arm64Analysis;
use crate::report::{AnalysisReport, MigrationSummary};

const TITLE: &str = "tf-arm: Terraform State ARM64 Analyzer";

/// Formatter for the terminal report: a banner, one block per resource and
/// a summary.
pub struct TextFormatter {
    /// Whether to emphasize headings and verdicts with ANSI colors.
    pub colored: bool,
}

impl TextFormatter {
    fn separator() -> String {
        "=".repeat(80)
    }

    fn heading(&self, text: &str) -> String {
        if self.colored {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn verdict(&self, compatible: bool) -> String {
        let text = compatible.to_string();
        match (self.colored, compatible) {
            (false, _) => text,
            (true, true) => text.green().to_string(),
            (true, false) => text.red().to_string(),
        }
    }

    fn recommendation(&self, recommended: &str) -> String {
        if self.colored {
            recommended.yellow().to_string()
        } else {
            recommended.to_string()
        }
    }

    fn write_analysis(&self, out: &mut String, analysis: &Arm64Analysis) -> std::fmt::Result {
        writeln!(out, "Resource: {}", self.heading(&analysis.full_address))?;
        writeln!(out, "  Current Architecture: {}", analysis.current_arch)?;
        writeln!(out, "  ARM64 Compatible: {}", self.verdict(analysis.arm64_compatible))?;
        if analysis.arm64_compatible && !analysis.recommended_arch.is_empty() {
            writeln!(
                out,
                "  Recommended: {}",
                self.recommendation(&analysis.recommended_arch)
            )?;
        }
        writeln!(out, "  Notes: {}", analysis.notes)?;
        writeln!(out)
    }

    fn write_summary(&self, out: &mut String, summary: &MigrationSummary) -> std::fmt::Result {
        writeln!(out, "{}", Self::separator())?;
        writeln!(out, "{}", self.heading("Analysis Summary:"))?;
        writeln!(out, "  Total analyzed resources: {}", summary.total_analyzed)?;
        writeln!(out, "  ARM64 compatible resources: {}", summary.arm64_compatible)?;
        writeln!(out, "  Resources already using ARM64: {}", summary.already_using())?;
        write!(out, "  Resources that can migrate to ARM64: {}", summary.migrateable)?;
        if summary.total_analyzed > 0 {
            write!(out, "\n  Compatibility rate: {:.1}%", summary.compatibility_rate)?;
        }
        if summary.arm64_compatible > 0 {
            write!(
                out,
                "\n  Percentage of ARM64-capable resources not using ARM64: {:.1}%",
                summary.migrateable_percent
            )?;
        }
        Ok(())
    }

    fn render(&self, report: &AnalysisReport) -> Result<String, std::fmt::Error> {
        let mut out = String::new();

        writeln!(out, "{}", self.heading(TITLE))?;
        writeln!(out, "Analyzing Terraform state file: {}", report.state_file)?;
        writeln!(out)?;
        writeln!(out, "Found {} resources", report.resource_count)?;
        writeln!(out, "{}", Self::separator())?;

        for analysis in &report.analyses {
            self.write_analysis(&mut out, analysis)?;
        }

        self.write_summary(&mut out, &report.summary)?;
        Ok(out)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &AnalysisReport) -> String {
        // Writing into a String cannot fail.
        self.render(report).unwrap_or_default()
    }
}
