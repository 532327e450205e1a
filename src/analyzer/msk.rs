use super::tables::MSK;
use super::{ARCH_X86_64, Analyzer, Arm64Analysis, Notes, analyze_instances};
use crate::terraform::TerraformResource;

const NOTES: Notes = Notes {
    already: "Already using ARM64 instance type",
    migrate: "Can migrate to ARM64 instance type: ",
    unavailable: "No ARM64 compatible instance type available",
};

pub struct MskAnalyzer;

impl Analyzer for MskAnalyzer {
    fn supported_type(&self) -> &'static str {
        "aws_msk_cluster"
    }

    fn analyze(&self, resource: &TerraformResource) -> Arm64Analysis {
        analyze_instances(
            Arm64Analysis::for_resource(resource).with_current_arch(ARCH_X86_64),
            resource,
            |attributes| attributes.block_string("broker_node_group_info", "instance_type"),
            &MSK,
            &NOTES,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::resource;
    use super::*;
    use serde_json::json;

    fn cluster(instance_type: &str) -> Arm64Analysis {
        MskAnalyzer.analyze(&resource(
            "aws_msk_cluster",
            "kafka",
            vec![json!({
                "broker_node_group_info": [{"instance_type": instance_type, "client_subnets": []}]
            })],
        ))
    }

    #[test]
    fn graviton_brokers() {
        let analysis = cluster("kafka.m7g.large");

        assert!(analysis.already_using_arm64);
        assert_eq!(analysis.current_arch, "ARM64");
    }

    #[test]
    fn m5_brokers_move_to_m6g() {
        let analysis = cluster("kafka.m5.2xlarge");

        assert!(analysis.can_migrate());
        assert_eq!(analysis.recommended_arch, "kafka.m6g.2xlarge");
        assert_eq!(
            analysis.notes,
            "Can migrate to ARM64 instance type: kafka.m6g.2xlarge"
        );
    }

    #[test]
    fn t3_brokers_have_no_alternative() {
        let analysis = cluster("kafka.t3.small");

        assert!(!analysis.arm64_compatible);
        assert_eq!(analysis.notes, "No ARM64 compatible instance type available");
    }
}
