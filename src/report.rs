//! Aggregation of per-resource verdicts into a migration report.

use log::debug;
use serde::Serialize;

use crate::analyzer::{Arm64Analysis, analyze_resource};
use crate::terraform::TerraformState;

/// Percentage of analyzed resources that can run on ARM64.
pub fn compatibility_rate(arm64_compatible: usize, total_analyzed: usize) -> f64 {
    if total_analyzed == 0 {
        return 0.0;
    }
    arm64_compatible as f64 / total_analyzed as f64 * 100.0
}

/// Percentage of ARM64-capable resources that are not on ARM64 yet.
pub fn migrateable_percent(migrateable: usize, arm64_compatible: usize) -> f64 {
    if arm64_compatible == 0 {
        return 0.0;
    }
    migrateable as f64 / arm64_compatible as f64 * 100.0
}

/// Totals over all supported verdicts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MigrationSummary {
    pub total_analyzed: usize,
    pub arm64_compatible: usize,
    pub migrateable: usize,
    pub compatibility_rate: f64,
    pub migrateable_percent: f64,
}

impl MigrationSummary {
    /// Computes the totals. Unsupported verdicts are ignored.
    pub fn from_analyses(analyses: &[Arm64Analysis]) -> Self {
        let supported = analyses.iter().filter(|analysis| analysis.supported);

        let mut summary = Self::default();
        for analysis in supported {
            summary.total_analyzed += 1;
            if analysis.arm64_compatible {
                summary.arm64_compatible += 1;
            }
            if analysis.can_migrate() {
                summary.migrateable += 1;
            }
        }

        summary.compatibility_rate =
            compatibility_rate(summary.arm64_compatible, summary.total_analyzed);
        summary.migrateable_percent =
            migrateable_percent(summary.migrateable, summary.arm64_compatible);
        summary
    }

    /// Compatible resources that already run on ARM64.
    pub fn already_using(&self) -> usize {
        self.arm64_compatible - self.migrateable
    }
}

/// Result of analyzing a whole state file.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Path of the state file as given on the command line.
    pub state_file: String,
    /// Number of resources in the state file, including data sources and
    /// unsupported types.
    pub resource_count: usize,
    /// Verdicts for supported managed resources, in state-file order.
    pub analyses: Vec<Arm64Analysis>,
    pub summary: MigrationSummary,
}

impl AnalysisReport {
    pub fn from_state(state_file: impl Into<String>, state: &TerraformState) -> Self {
        let mut analyses = Vec::new();

        for resource in &state.resources {
            if !resource.is_managed() {
                debug!("Skipping {} resource {}", resource.mode, resource.full_address());
                continue;
            }

            let analysis = analyze_resource(resource);
            if analysis.supported {
                analyses.push(analysis);
            }
        }

        let summary = MigrationSummary::from_analyses(&analyses);
        debug!(
            "Analyzed {} of {} resources: {} compatible, {} migrateable",
            summary.total_analyzed,
            state.resources.len(),
            summary.arm64_compatible,
            summary.migrateable
        );

        Self {
            state_file: state_file.into(),
            resource_count: state.resources.len(),
            analyses,
            summary,
        }
    }

    /// True if at least one resource could move to ARM64.
    pub fn has_migrateable(&self) -> bool {
        self.summary.migrateable > 0
    }
}
