use super::tables::{CompatibilityTable, ELASTICACHE, MEMORYDB};
use super::{ARCH_X86_64, Analyzer, Arm64Analysis, Notes, analyze_instances};
use crate::terraform::TerraformResource;

const NOTES: Notes = Notes {
    already: "Already using ARM64 node type",
    migrate: "Can migrate to ARM64 node type: ",
    unavailable: "No ARM64 compatible node type available",
};

fn analyze_node_type(resource: &TerraformResource, table: &CompatibilityTable) -> Arm64Analysis {
    analyze_instances(
        Arm64Analysis::for_resource(resource).with_current_arch(ARCH_X86_64),
        resource,
        |attributes| attributes.string("node_type"),
        table,
        &NOTES,
    )
}

pub struct ElastiCacheAnalyzer;

impl Analyzer for ElastiCacheAnalyzer {
    fn supported_type(&self) -> &'static str {
        "aws_elasticache_cluster"
    }

    fn analyze(&self, resource: &TerraformResource) -> Arm64Analysis {
        analyze_node_type(resource, &ELASTICACHE)
    }
}

pub struct MemoryDbAnalyzer;

impl Analyzer for MemoryDbAnalyzer {
    fn supported_type(&self) -> &'static str {
        "aws_memorydb_cluster"
    }

    fn analyze(&self, resource: &TerraformResource) -> Arm64Analysis {
        analyze_node_type(resource, &MEMORYDB)
    }
}
