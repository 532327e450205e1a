use super::tables::OPENSEARCH;
use super::{ARCH_X86_64, Analyzer, Arm64Analysis, Notes, analyze_instances};
use crate::terraform::TerraformResource;

const NOTES: Notes = Notes {
    already: "Already using ARM64 instance type",
    migrate: "Can migrate to ARM64 instance type: ",
    unavailable: "No ARM64 compatible instance type available",
};

pub struct OpenSearchAnalyzer;

impl Analyzer for OpenSearchAnalyzer {
    fn supported_type(&self) -> &'static str {
        "aws_opensearch_domain"
    }

    fn analyze(&self, resource: &TerraformResource) -> Arm64Analysis {
        analyze_instances(
            Arm64Analysis::for_resource(resource).with_current_arch(ARCH_X86_64),
            resource,
            |attributes| attributes.block_string("cluster_config", "instance_type"),
            &OPENSEARCH,
            &NOTES,
        )
    }
}
