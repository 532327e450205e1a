use super::tables::CODEBUILD;
use super::{ARCH_X86_64_DEFAULT, Analyzer, Arm64Analysis, Notes, analyze_instances};
use crate::terraform::TerraformResource;

const NOTES: Notes = Notes {
    already: "Already using ARM64 compute type",
    migrate: "Can migrate to ARM64 compute type: ",
    unavailable: "No ARM64 compatible compute type available",
};

/// CodeBuild projects pick ARM64 through the `_ARM` compute types of the
/// `environment` block.
pub struct CodeBuildAnalyzer;

impl Analyzer for CodeBuildAnalyzer {
    fn supported_type(&self) -> &'static str {
        "aws_codebuild_project"
    }

    fn analyze(&self, resource: &TerraformResource) -> Arm64Analysis {
        analyze_instances(
            Arm64Analysis::for_resource(resource)
                .with_current_arch(ARCH_X86_64_DEFAULT)
                .recommending_arm64(),
            resource,
            |attributes| attributes.block_string("environment", "compute_type"),
            &CODEBUILD,
            &NOTES,
        )
    }
}
