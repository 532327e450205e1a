use log::debug;

use super::tables::{Classification, EC2};
use super::{ARCH_ARM64, ARCH_X86_64, Analyzer, Arm64Analysis};
use crate::terraform::{Attributes, TerraformResource};

const ARM64_AMI_TYPES: &[&str] = &[
    "AL2_ARM_64",
    "AL2023_ARM_64_STANDARD",
    "BOTTLEROCKET_ARM_64",
    "BOTTLEROCKET_ARM_64_NVIDIA",
];

const AMI_HINT: &str = "Consider using AL2_ARM_64 AMI type";

/// EKS managed node groups. Any node group can move to ARM64 by choosing
/// Graviton instance types together with an ARM64 AMI type.
pub struct EksAnalyzer;

enum InstanceTypes<'a> {
    Missing,
    Empty,
    First(&'a str),
}

impl EksAnalyzer {
    /// Returns `None` when `instance_types` is not a list of strings.
    fn instance_types(attributes: &Attributes) -> Option<InstanceTypes<'_>> {
        if !attributes.contains("instance_types") {
            return Some(InstanceTypes::Missing);
        }
        match attributes.list("instance_types")?.first() {
            None => Some(InstanceTypes::Empty),
            Some(first) => first.as_str().map(InstanceTypes::First),
        }
    }

    fn check_instance_types(analysis: &mut Arm64Analysis, instance_types: InstanceTypes<'_>) {
        let instance_type = match instance_types {
            InstanceTypes::Missing => {
                analysis.notes =
                    "Can specify ARM64 instance types for EKS node group".to_string();
                return;
            }
            InstanceTypes::Empty => return,
            InstanceTypes::First(instance_type) => instance_type,
        };

        match EC2.classify(instance_type) {
            Classification::Arm64 => {
                analysis.current_arch = ARCH_ARM64.to_string();
                analysis.already_using_arm64 = true;
                analysis.notes = "Already using ARM64 instance type".to_string();
            }
            Classification::Alternative(target) => {
                analysis.recommended_arch = target.to_string();
                analysis.notes = format!("Can migrate to ARM64 instance type: {}", target);
            }
            Classification::Unavailable => {
                analysis.notes = "Can use ARM64 instance types for EKS node group".to_string();
            }
        }
    }

    fn check_ami_type(analysis: &mut Arm64Analysis, attributes: &Attributes) {
        let Some(ami_type) = attributes.string("ami_type") else {
            return;
        };

        if ARM64_AMI_TYPES.contains(&ami_type) {
            analysis.current_arch = ARCH_ARM64.to_string();
            analysis.already_using_arm64 = true;
            analysis.recommended_arch = ARCH_ARM64.to_string();
            analysis.notes = "Already using ARM64 AMI type".to_string();
        } else if analysis.notes.is_empty() {
            analysis.notes = AMI_HINT.to_string();
        } else {
            analysis.notes = format!("{} | {}", analysis.notes, AMI_HINT);
        }
    }
}

impl Analyzer for EksAnalyzer {
    fn supported_type(&self) -> &'static str {
        "aws_eks_node_group"
    }

    fn analyze(&self, resource: &TerraformResource) -> Arm64Analysis {
        let mut analysis = Arm64Analysis::for_resource(resource)
            .with_current_arch(ARCH_X86_64)
            .recommending_arm64();

        for instance in &resource.instances {
            let attributes = &instance.attributes;
            let Some(instance_types) = Self::instance_types(attributes) else {
                debug!("{}: ignoring malformed instance_types", resource.full_address());
                continue;
            };

            // Each node group instance is judged from scratch.
            analysis.current_arch = ARCH_X86_64.to_string();
            analysis.already_using_arm64 = false;
            analysis.recommended_arch = ARCH_ARM64.to_string();
            analysis.notes.clear();

            Self::check_instance_types(&mut analysis, instance_types);
            Self::check_ami_type(&mut analysis, attributes);
        }
        analysis
    }
}
