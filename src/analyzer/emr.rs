use super::tables::EMR;
use super::{
    ARCH_ARM64, ARCH_X86_64, ARCH_X86_64_DEFAULT, Analyzer, Arm64Analysis, Notes, analyze_instances,
};
use crate::terraform::TerraformResource;

const NOTES: Notes = Notes {
    already: "Already using ARM64 instance type for master node",
    migrate: "Can migrate to ARM64 instance type: ",
    unavailable: "EMR supports ARM64 with Graviton2 instances",
};

const SERVERLESS_NOTE: &str = "EMR Serverless supports ARM64 architecture for cost optimization";

/// EMR clusters, judged by the master instance group.
pub struct EmrAnalyzer;

impl Analyzer for EmrAnalyzer {
    fn supported_type(&self) -> &'static str {
        "aws_emr_cluster"
    }

    fn analyze(&self, resource: &TerraformResource) -> Arm64Analysis {
        analyze_instances(
            Arm64Analysis::for_resource(resource).with_current_arch(ARCH_X86_64),
            resource,
            |attributes| attributes.block_string("master_instance_group", "instance_type"),
            &EMR,
            &NOTES,
        )
    }
}

pub struct EmrServerlessAnalyzer;

impl Analyzer for EmrServerlessAnalyzer {
    fn supported_type(&self) -> &'static str {
        "aws_emrserverless_application"
    }

    fn analyze(&self, resource: &TerraformResource) -> Arm64Analysis {
        let mut analysis = Arm64Analysis::for_resource(resource)
            .with_current_arch(ARCH_X86_64_DEFAULT)
            .recommending_arm64();
        analysis.notes = SERVERLESS_NOTE.to_string();

        for instance in &resource.instances {
            match instance.attributes.string("architecture") {
                Some(ARCH_ARM64) => {
                    analysis.current_arch = ARCH_ARM64.to_string();
                    analysis.already_using_arm64 = true;
                    analysis.notes = "Already using ARM64 architecture".to_string();
                }
                Some(_) => {
                    analysis.current_arch = ARCH_X86_64.to_string();
                    analysis.already_using_arm64 = false;
                    analysis.notes = SERVERLESS_NOTE.to_string();
                }
                None => {}
            }
        }
        analysis
    }
}
