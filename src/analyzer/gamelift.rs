use super::tables::GAMELIFT;
use super::{ARCH_X86_64, Analyzer, Arm64Analysis, Notes, analyze_instances};
use crate::terraform::TerraformResource;

const NOTES: Notes = Notes {
    already: "Already using ARM64 instance type",
    migrate: "Can migrate to ARM64 instance type: ",
    unavailable: "GameLift supports ARM64 with Graviton2 instances",
};

pub struct GameLiftAnalyzer;

impl Analyzer for GameLiftAnalyzer {
    fn supported_type(&self) -> &'static str {
        "aws_gamelift_fleet"
    }

    fn analyze(&self, resource: &TerraformResource) -> Arm64Analysis {
        analyze_instances(
            Arm64Analysis::for_resource(resource).with_current_arch(ARCH_X86_64),
            resource,
            |attributes| attributes.string("ec2_instance_type"),
            &GAMELIFT,
            &NOTES,
        )
    }
}
