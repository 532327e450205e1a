use super::tables::EC2;
use super::{Analyzer, Arm64Analysis, Notes, analyze_instances};
use crate::terraform::TerraformResource;

const NOTES: Notes = Notes {
    already: "Already using ARM64 instance type",
    migrate: "Can migrate to ARM64 instance type ",
    unavailable: "No ARM64 compatible instance type available",
};

pub struct Ec2Analyzer;

impl Analyzer for Ec2Analyzer {
    fn supported_type(&self) -> &'static str {
        "aws_instance"
    }

    fn analyze(&self, resource: &TerraformResource) -> Arm64Analysis {
        analyze_instances(
            Arm64Analysis::for_resource(resource),
            resource,
            |attributes| attributes.string("instance_type"),
            &EC2,
            &NOTES,
        )
    }
}

/// Launch templates carry the same `instance_type` attribute as instances.
pub struct LaunchTemplateAnalyzer;

impl Analyzer for LaunchTemplateAnalyzer {
    fn supported_type(&self) -> &'static str {
        "aws_launch_template"
    }

    fn analyze(&self, resource: &TerraformResource) -> Arm64Analysis {
        analyze_instances(
            Arm64Analysis::for_resource(resource),
            resource,
            |attributes| attributes.string("instance_type"),
            &EC2,
            &NOTES,
        )
    }
}
