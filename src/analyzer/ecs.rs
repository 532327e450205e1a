use super::{ARCH_ARM64, ARCH_X86_64, ARCH_X86_64_DEFAULT, Analyzer, Arm64Analysis};
use crate::terraform::{Attributes, TerraformResource};

const FARGATE_CAPACITY_PROVIDERS: &[&str] = &["FARGATE", "FARGATE_SPOT"];

/// Task definitions select their architecture with a single setting, so
/// every task definition can move to ARM64.
pub struct EcsTaskDefinitionAnalyzer;

impl EcsTaskDefinitionAnalyzer {
    /// Older state files carry `cpu_architecture` at the top level, newer
    /// ones inside the `runtime_platform` block.
    fn cpu_architecture(attributes: &Attributes) -> Option<Option<&str>> {
        if attributes.contains("cpu_architecture") {
            return Some(attributes.string("cpu_architecture"));
        }
        attributes
            .first_block("runtime_platform")
            .and_then(|platform| platform.get("cpu_architecture"))
            .map(|value| value.as_str())
    }
}

impl Analyzer for EcsTaskDefinitionAnalyzer {
    fn supported_type(&self) -> &'static str {
        "aws_ecs_task_definition"
    }

    fn analyze(&self, resource: &TerraformResource) -> Arm64Analysis {
        let mut analysis = Arm64Analysis::for_resource(resource)
            .with_current_arch(ARCH_X86_64_DEFAULT)
            .recommending_arm64();

        for instance in &resource.instances {
            match Self::cpu_architecture(&instance.attributes) {
                Some(Some(ARCH_ARM64)) => {
                    analysis.current_arch = ARCH_ARM64.to_string();
                    analysis.already_using_arm64 = true;
                    analysis.notes = "Already using ARM64 architecture".to_string();
                }
                Some(Some(_)) => {
                    analysis.current_arch = ARCH_X86_64.to_string();
                    analysis.already_using_arm64 = false;
                    analysis.notes = "Can change cpu_architecture to ARM64".to_string();
                }
                // present but not a string
                Some(None) => continue,
                None => {
                    analysis.current_arch = ARCH_X86_64_DEFAULT.to_string();
                    analysis.already_using_arm64 = false;
                    analysis.notes = "Can add cpu_architecture = \"ARM64\"".to_string();
                }
            }
        }
        analysis
    }
}

/// ECS services can run ARM64 tasks only on Fargate.
pub struct EcsServiceAnalyzer;

impl EcsServiceAnalyzer {
    fn uses_fargate_capacity_provider(attributes: &Attributes) -> bool {
        attributes
            .list("capacity_provider_strategy")
            .unwrap_or_default()
            .iter()
            .filter_map(|strategy| strategy.get("capacity_provider")?.as_str())
            .any(|provider| FARGATE_CAPACITY_PROVIDERS.contains(&provider))
    }
}

impl Analyzer for EcsServiceAnalyzer {
    fn supported_type(&self) -> &'static str {
        "aws_ecs_service"
    }

    fn analyze(&self, resource: &TerraformResource) -> Arm64Analysis {
        let mut analysis = Arm64Analysis::for_resource(resource)
            .with_current_arch(ARCH_X86_64_DEFAULT)
            .recommending_arm64();

        for instance in &resource.instances {
            let attributes = &instance.attributes;

            // The provider stores an empty launch_type when a capacity
            // provider strategy is used instead.
            match attributes.get("launch_type") {
                Some(value) if value.as_str() != Some("") => {
                    let Some(launch_type) = value.as_str() else {
                        continue;
                    };
                    if launch_type == "FARGATE" {
                        analysis.arm64_compatible = true;
                        analysis.notes =
                            "Fargate supports ARM64. Check task definition cpu_architecture"
                                .to_string();
                    } else {
                        analysis.arm64_compatible = false;
                        analysis.notes = "Not using Fargate launch type".to_string();
                    }
                }
                _ => {
                    if Self::uses_fargate_capacity_provider(attributes) {
                        analysis.arm64_compatible = true;
                        analysis.notes =
                            "Using Fargate capacity provider. Check task definition cpu_architecture"
                                .to_string();
                        return analysis;
                    }
                    analysis.arm64_compatible = false;
                    analysis.notes =
                        "Service configuration unclear for ARM64 compatibility".to_string();
                }
            }
        }
        analysis
    }
}
