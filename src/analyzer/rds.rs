use super::tables::RDS;
use super::{ARCH_ARM64, ARCH_X86_64, Analyzer, Arm64Analysis, Notes, analyze_instances};
use crate::terraform::TerraformResource;

const NOTES: Notes = Notes {
    already: "Already using ARM64 instance class",
    migrate: "Can migrate to ARM64 instance class: ",
    unavailable: "No ARM64 compatible instance class available",
};

const AURORA_ARM64_ENGINES: &[&str] = &["aurora-mysql", "aurora-postgresql"];

pub struct RdsAnalyzer;

impl Analyzer for RdsAnalyzer {
    fn supported_type(&self) -> &'static str {
        "aws_db_instance"
    }

    fn analyze(&self, resource: &TerraformResource) -> Arm64Analysis {
        analyze_instances(
            Arm64Analysis::for_resource(resource).with_current_arch(ARCH_X86_64),
            resource,
            |attributes| attributes.string("instance_class"),
            &RDS,
            &NOTES,
        )
    }
}

/// Aurora clusters are judged by engine. Instance classes usually live on
/// the cluster instances, except for Multi-AZ DB clusters which carry
/// `db_cluster_instance_class` on the cluster itself.
pub struct AuroraAnalyzer;

impl Analyzer for AuroraAnalyzer {
    fn supported_type(&self) -> &'static str {
        "aws_rds_cluster"
    }

    fn analyze(&self, resource: &TerraformResource) -> Arm64Analysis {
        let mut analysis = Arm64Analysis::for_resource(resource).with_current_arch(ARCH_X86_64);

        for instance in &resource.instances {
            let attributes = &instance.attributes;
            let Some(engine) = attributes.string("engine") else {
                continue;
            };

            analysis.current_arch = ARCH_X86_64.to_string();
            analysis.already_using_arm64 = false;

            if !AURORA_ARM64_ENGINES.contains(&engine) {
                analysis.arm64_compatible = false;
                analysis.recommended_arch.clear();
                analysis.notes = format!("Engine {} may not support ARM64", engine);
                continue;
            }

            analysis.arm64_compatible = true;
            analysis.recommended_arch = ARCH_ARM64.to_string();

            let arm64_class = attributes
                .string("db_cluster_instance_class")
                .is_some_and(|class| RDS.is_arm64(class));
            if arm64_class {
                analysis.current_arch = ARCH_ARM64.to_string();
                analysis.already_using_arm64 = true;
                analysis.notes = NOTES.already.to_string();
            } else {
                analysis.notes = format!(
                    "Aurora {} supports ARM64 with compatible instance classes",
                    engine
                );
            }
        }
        analysis
    }
}
