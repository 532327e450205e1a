//! ARM64 compatibility analysis of Terraform resources.
//!
//! Every supported resource type has an [`Analyzer`] that inspects the
//! resource's attributes and produces an [`Arm64Analysis`] verdict. Analyzers
//! are stateless and registered in a static table; [`analyze_resource`] picks
//! the one matching the resource type.

mod codebuild;
mod ec2;
mod ecs;
mod eks;
mod elasticache;
mod emr;
mod gamelift;
mod lambda;
mod msk;
mod opensearch;
mod rds;
mod sagemaker;
pub mod tables;

use log::debug;
use serde::Serialize;

use crate::terraform::{Attributes, TerraformResource};
use tables::{Classification, CompatibilityTable};

pub const ARCH_ARM64: &str = "ARM64";
pub const ARCH_X86_64: &str = "X86_64";
pub const ARCH_X86_64_DEFAULT: &str = "X86_64 (default)";

pub const UNSUPPORTED_NOTE: &str = "Resource type not supported for ARM64 compatibility check";

/// Compatibility verdict for a single resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Arm64Analysis {
    pub resource_type: String,
    pub resource_name: String,
    pub full_address: String,
    pub current_arch: String,
    pub arm64_compatible: bool,
    pub already_using_arm64: bool,
    pub recommended_arch: String,
    pub supported: bool,
    pub notes: String,
}

impl Arm64Analysis {
    /// Starts a verdict for a resource handled by an analyzer.
    pub fn for_resource(resource: &TerraformResource) -> Self {
        Self {
            resource_type: resource.resource_type.clone(),
            resource_name: resource.name.clone(),
            supported: true,
            ..Default::default()
        }
    }

    /// Verdict for a resource type no analyzer handles.
    pub fn unsupported(resource: &TerraformResource) -> Self {
        Self {
            resource_type: resource.resource_type.clone(),
            resource_name: resource.name.clone(),
            full_address: resource.full_address(),
            supported: false,
            arm64_compatible: false,
            notes: UNSUPPORTED_NOTE.to_string(),
            ..Default::default()
        }
    }

    pub fn with_current_arch(mut self, arch: &str) -> Self {
        self.current_arch = arch.to_string();
        self
    }

    /// Marks the verdict compatible with ARM64 as the recommendation.
    ///
    /// Used by services where ARM64 is a plain setting rather than a choice
    /// of instance type.
    pub fn recommending_arm64(mut self) -> Self {
        self.arm64_compatible = true;
        self.recommended_arch = ARCH_ARM64.to_string();
        self
    }

    /// True if the resource could run on ARM64 but does not yet.
    pub fn can_migrate(&self) -> bool {
        self.arm64_compatible && !self.already_using_arm64
    }

    /// Overwrites the classification fields with the outcome of a table
    /// lookup.
    pub(crate) fn record(&mut self, classification: Classification, notes: &Notes) {
        match classification {
            Classification::Arm64 => {
                self.current_arch = ARCH_ARM64.to_string();
                self.arm64_compatible = true;
                self.already_using_arm64 = true;
                self.recommended_arch = ARCH_ARM64.to_string();
                self.notes = notes.already.to_string();
            }
            Classification::Alternative(target) => {
                self.current_arch = ARCH_X86_64.to_string();
                self.arm64_compatible = true;
                self.already_using_arm64 = false;
                self.recommended_arch = target.to_string();
                self.notes = format!("{}{}", notes.migrate, target);
            }
            Classification::Unavailable => {
                self.current_arch = ARCH_X86_64.to_string();
                self.arm64_compatible = false;
                self.already_using_arm64 = false;
                self.recommended_arch.clear();
                self.notes = notes.unavailable.to_string();
            }
        }
    }
}

/// Wording of the notes recorded for each classification outcome.
pub(crate) struct Notes {
    pub already: &'static str,
    /// Prefix placed in front of the recommended type.
    pub migrate: &'static str,
    pub unavailable: &'static str,
}

/// Analyzes one Terraform resource type.
pub trait Analyzer: Sync {
    /// The Terraform resource type this analyzer handles, e.g. `aws_instance`.
    fn supported_type(&self) -> &'static str;

    fn analyze(&self, resource: &TerraformResource) -> Arm64Analysis;
}

/// Classifies each instance of a resource against a table.
///
/// Instances where `locate` finds nothing are skipped. Later instances
/// overwrite the outcome of earlier ones.
pub(crate) fn analyze_instances<F>(
    mut analysis: Arm64Analysis,
    resource: &TerraformResource,
    locate: F,
    table: &CompatibilityTable,
    notes: &Notes,
) -> Arm64Analysis
where
    F: Fn(&Attributes) -> Option<&str>,
{
    for instance in &resource.instances {
        if let Some(type_name) = locate(&instance.attributes) {
            analysis.record(table.classify(type_name), notes);
        }
    }
    analysis
}

static ANALYZERS: &[&dyn Analyzer] = &[
    &ec2::Ec2Analyzer,
    &ec2::LaunchTemplateAnalyzer,
    &ecs::EcsTaskDefinitionAnalyzer,
    &ecs::EcsServiceAnalyzer,
    &lambda::LambdaAnalyzer,
    &codebuild::CodeBuildAnalyzer,
    &rds::RdsAnalyzer,
    &rds::AuroraAnalyzer,
    &elasticache::ElastiCacheAnalyzer,
    &elasticache::MemoryDbAnalyzer,
    &eks::EksAnalyzer,
    &emr::EmrAnalyzer,
    &emr::EmrServerlessAnalyzer,
    &opensearch::OpenSearchAnalyzer,
    &msk::MskAnalyzer,
    &sagemaker::SageMakerAnalyzer,
    &gamelift::GameLiftAnalyzer,
];

/// Returns the analyzer registered for a resource type.
pub fn find_analyzer(resource_type: &str) -> Option<&'static dyn Analyzer> {
    ANALYZERS
        .iter()
        .copied()
        .find(|analyzer| analyzer.supported_type() == resource_type)
}

/// All resource types with a registered analyzer, in registration order.
pub fn supported_types() -> impl Iterator<Item = &'static str> {
    ANALYZERS.iter().map(|analyzer| analyzer.supported_type())
}

/// Produces the verdict for a resource.
///
/// Unsupported resource types are not an error; they yield a verdict with
/// `supported = false`.
pub fn analyze_resource(resource: &TerraformResource) -> Arm64Analysis {
    let Some(analyzer) = find_analyzer(&resource.resource_type) else {
        debug!("No analyzer for {}", resource.resource_type);
        return Arm64Analysis::unsupported(resource);
    };

    let mut analysis = analyzer.analyze(resource);
    analysis.full_address = resource.full_address();

    debug!(
        "{}: arch={:?} compatible={} already_arm64={}",
        analysis.full_address,
        analysis.current_arch,
        analysis.arm64_compatible,
        analysis.already_using_arm64
    );

    analysis
}
