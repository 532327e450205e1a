use super::tables::SAGEMAKER;
use super::{ARCH_X86_64, Analyzer, Arm64Analysis, Notes, analyze_instances};
use crate::terraform::TerraformResource;

const NOTES: Notes = Notes {
    already: "Already using ARM64 instance type",
    migrate: "Can migrate to ARM64 instance type: ",
    unavailable: "No ARM64 compatible instance type available",
};

/// Endpoint configurations, judged by the first production variant.
pub struct SageMakerAnalyzer;

impl Analyzer for SageMakerAnalyzer {
    fn supported_type(&self) -> &'static str {
        "aws_sagemaker_endpoint_configuration"
    }

    fn analyze(&self, resource: &TerraformResource) -> Arm64Analysis {
        analyze_instances(
            Arm64Analysis::for_resource(resource).with_current_arch(ARCH_X86_64),
            resource,
            |attributes| attributes.block_string("production_variants", "instance_type"),
            &SAGEMAKER,
            &NOTES,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::resource;
    use super::*;
    use serde_json::json;

    fn endpoint(instance_type: &str) -> Arm64Analysis {
        SageMakerAnalyzer.analyze(&resource(
            "aws_sagemaker_endpoint_configuration",
            "endpoint",
            vec![json!({
                "production_variants": [
                    {"variant_name": "primary", "instance_type": instance_type},
                    {"variant_name": "shadow", "instance_type": "ml.c6g.large"}
                ]
            })],
        ))
    }

    #[test]
    fn graviton_variant() {
        assert!(endpoint("ml.m6g.large").already_using_arm64);
    }

    #[test]
    fn x86_variant_with_alternative() {
        let analysis = endpoint("ml.c5.9xlarge");

        assert!(analysis.can_migrate());
        assert_eq!(analysis.recommended_arch, "ml.c6g.8xlarge");
    }

    #[test]
    fn only_first_variant_counts() {
        let analysis = endpoint("ml.g5.xlarge");

        assert!(!analysis.arm64_compatible);
        assert_eq!(analysis.notes, "No ARM64 compatible instance type available");
    }
}
