//! Static ARM64 compatibility tables, one per service.
//!
//! Each table answers two questions about a type name: is it already an ARM64
//! (Graviton) type, and if not, which ARM64 type replaces it. Tables cover
//! Graviton1 through Graviton4 where the service offers them.

/// How a table recognizes type names that already run on ARM64.
#[derive(Debug, Clone, Copy)]
pub enum Arm64Identity {
    /// Any type name starting with one of these family prefixes.
    Prefixes(&'static [&'static str]),
    /// Only these exact type names.
    Exact(&'static [&'static str]),
}

/// Outcome of looking up a type name in a [`CompatibilityTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The type already runs on ARM64.
    Arm64,
    /// The type is x86 and has a known ARM64 replacement.
    Alternative(&'static str),
    /// The type is x86 and no replacement is known.
    Unavailable,
}

#[derive(Debug, Clone, Copy)]
pub struct CompatibilityTable {
    pub identity: Arm64Identity,
    /// Exact x86 type name to recommended ARM64 type name.
    pub migrations: &'static [(&'static str, &'static str)],
}

impl CompatibilityTable {
    pub fn is_arm64(&self, type_name: &str) -> bool {
        match self.identity {
            Arm64Identity::Prefixes(prefixes) => prefixes
                .iter()
                .any(|prefix| type_name.starts_with(prefix)),
            Arm64Identity::Exact(names) => names.iter().any(|name| *name == type_name),
        }
    }

    pub fn has_alternative(&self, type_name: &str) -> bool {
        self.alternative(type_name).is_some()
    }

    pub fn alternative(&self, type_name: &str) -> Option<&'static str> {
        self.migrations
            .iter()
            .find(|(x86, _)| *x86 == type_name)
            .map(|(_, arm64)| *arm64)
    }

    /// Classifies a type name. An ARM64 match always wins over the
    /// migration map.
    pub fn classify(&self, type_name: &str) -> Classification {
        if self.is_arm64(type_name) {
            Classification::Arm64
        } else if let Some(target) = self.alternative(type_name) {
            Classification::Alternative(target)
        } else {
            Classification::Unavailable
        }
    }
}

// ---------------------------------------------------------------------------
// EC2 (instances, launch templates, EKS node groups)
// ---------------------------------------------------------------------------

const EC2_ARM64_PREFIXES: &[&str] = &[
    // Graviton1
    "a1.",
    // Graviton2
    "t4g.", "m6g.", "m6gd.", "c6g.", "c6gd.", "c6gn.", "r6g.", "r6gd.", "x2gd.",
    // Graviton3
    "c7g.", "c7gd.", "c7gn.", "m7g.", "m7gd.", "r7g.", "r7gd.", "hpc7g.",
    // Graviton4
    "c8g.", "m8g.", "r8g.", "x8g.", "i8g.",
];

// Older generations move to Graviton3, the 6th generation Intel types to
// Graviton4.
const EC2_MIGRATIONS: &[(&str, &str)] = &[
    ("t3.nano", "t4g.nano"),
    ("t3.micro", "t4g.micro"),
    ("t3.small", "t4g.small"),
    ("t3.medium", "t4g.medium"),
    ("t3.large", "t4g.large"),
    ("t3.xlarge", "t4g.xlarge"),
    ("t3.2xlarge", "t4g.2xlarge"),
    ("m5.large", "m7g.large"),
    ("m5.xlarge", "m7g.xlarge"),
    ("m5.2xlarge", "m7g.2xlarge"),
    ("m5.4xlarge", "m7g.4xlarge"),
    ("m5.8xlarge", "m7g.8xlarge"),
    ("m5.12xlarge", "m7g.12xlarge"),
    ("m5.16xlarge", "m7g.16xlarge"),
    ("m6i.large", "m8g.large"),
    ("m6i.xlarge", "m8g.xlarge"),
    ("m6i.2xlarge", "m8g.2xlarge"),
    ("m6i.4xlarge", "m8g.4xlarge"),
    ("m6i.8xlarge", "m8g.8xlarge"),
    ("m6i.12xlarge", "m8g.12xlarge"),
    ("m6i.16xlarge", "m8g.16xlarge"),
    ("m6i.24xlarge", "m8g.24xlarge"),
    ("m6i.32xlarge", "m8g.32xlarge"),
    ("m6i.48xlarge", "m8g.48xlarge"),
    ("c5.large", "c7g.large"),
    ("c5.xlarge", "c7g.xlarge"),
    ("c5.2xlarge", "c7g.2xlarge"),
    ("c5.4xlarge", "c7g.4xlarge"),
    ("c5.9xlarge", "c7g.8xlarge"),
    ("c5.12xlarge", "c7g.12xlarge"),
    ("c5.18xlarge", "c7g.16xlarge"),
    ("c6i.large", "c8g.large"),
    ("c6i.xlarge", "c8g.xlarge"),
    ("c6i.2xlarge", "c8g.2xlarge"),
    ("c6i.4xlarge", "c8g.4xlarge"),
    ("c6i.8xlarge", "c8g.8xlarge"),
    ("c6i.12xlarge", "c8g.12xlarge"),
    ("c6i.16xlarge", "c8g.16xlarge"),
    ("c6i.24xlarge", "c8g.24xlarge"),
    ("c6i.32xlarge", "c8g.32xlarge"),
    ("c6i.48xlarge", "c8g.48xlarge"),
    ("r5.large", "r7g.large"),
    ("r5.xlarge", "r7g.xlarge"),
    ("r5.2xlarge", "r7g.2xlarge"),
    ("r5.4xlarge", "r7g.4xlarge"),
    ("r5.8xlarge", "r7g.8xlarge"),
    ("r5.12xlarge", "r7g.12xlarge"),
    ("r5.16xlarge", "r7g.16xlarge"),
    ("r6i.large", "r8g.large"),
    ("r6i.xlarge", "r8g.xlarge"),
    ("r6i.2xlarge", "r8g.2xlarge"),
    ("r6i.4xlarge", "r8g.4xlarge"),
    ("r6i.8xlarge", "r8g.8xlarge"),
    ("r6i.12xlarge", "r8g.12xlarge"),
    ("r6i.16xlarge", "r8g.16xlarge"),
    ("r6i.24xlarge", "r8g.24xlarge"),
    ("r6i.32xlarge", "r8g.32xlarge"),
    ("r6i.48xlarge", "r8g.48xlarge"),
];

pub const EC2: CompatibilityTable = CompatibilityTable {
    identity: Arm64Identity::Prefixes(EC2_ARM64_PREFIXES),
    migrations: EC2_MIGRATIONS,
};

// ---------------------------------------------------------------------------
// RDS
// ---------------------------------------------------------------------------

const RDS_ARM64_CLASSES: &[&str] = &[
    "db.t4g.nano", "db.t4g.micro", "db.t4g.small", "db.t4g.medium",
    "db.t4g.large", "db.t4g.xlarge", "db.t4g.2xlarge", "db.m6g.large",
    "db.m6g.xlarge", "db.m6g.2xlarge", "db.m6g.4xlarge", "db.m6g.8xlarge",
    "db.m6g.12xlarge", "db.m6g.16xlarge", "db.r6g.large", "db.r6g.xlarge",
    "db.r6g.2xlarge", "db.r6g.4xlarge", "db.r6g.8xlarge", "db.r6g.12xlarge",
    "db.r6g.16xlarge", "db.r6gd.large", "db.r6gd.xlarge", "db.r6gd.2xlarge",
    "db.r6gd.4xlarge", "db.r6gd.8xlarge", "db.r6gd.12xlarge", "db.r6gd.16xlarge",
    "db.m7g.large", "db.m7g.xlarge", "db.m7g.2xlarge", "db.m7g.4xlarge",
    "db.m7g.8xlarge", "db.m7g.12xlarge", "db.m7g.16xlarge", "db.r7g.large",
    "db.r7g.xlarge", "db.r7g.2xlarge", "db.r7g.4xlarge", "db.r7g.8xlarge",
    "db.r7g.12xlarge", "db.r7g.16xlarge",
];

const RDS_MIGRATIONS: &[(&str, &str)] = &[
    ("db.t3.nano", "db.t4g.nano"),
    ("db.t3.micro", "db.t4g.micro"),
    ("db.t3.small", "db.t4g.small"),
    ("db.t3.medium", "db.t4g.medium"),
    ("db.t3.large", "db.t4g.large"),
    ("db.t3.xlarge", "db.t4g.xlarge"),
    ("db.t3.2xlarge", "db.t4g.2xlarge"),
    ("db.m5.large", "db.m7g.large"),
    ("db.m5.xlarge", "db.m7g.xlarge"),
    ("db.m5.2xlarge", "db.m7g.2xlarge"),
    ("db.m5.4xlarge", "db.m7g.4xlarge"),
    ("db.m5.8xlarge", "db.m7g.8xlarge"),
    ("db.m5.12xlarge", "db.m7g.12xlarge"),
    ("db.m5.16xlarge", "db.m7g.16xlarge"),
    ("db.r5.large", "db.r7g.large"),
    ("db.r5.xlarge", "db.r7g.xlarge"),
    ("db.r5.2xlarge", "db.r7g.2xlarge"),
    ("db.r5.4xlarge", "db.r7g.4xlarge"),
    ("db.r5.8xlarge", "db.r7g.8xlarge"),
    ("db.r5.12xlarge", "db.r7g.12xlarge"),
    ("db.r5.16xlarge", "db.r7g.16xlarge"),
];

pub const RDS: CompatibilityTable = CompatibilityTable {
    identity: Arm64Identity::Exact(RDS_ARM64_CLASSES),
    migrations: RDS_MIGRATIONS,
};

// ---------------------------------------------------------------------------
// ElastiCache and MemoryDB
// ---------------------------------------------------------------------------

const ELASTICACHE_ARM64_NODE_TYPES: &[&str] = &[
    "cache.t4g.nano", "cache.t4g.micro", "cache.t4g.small", "cache.t4g.medium",
    "cache.m6g.large", "cache.m6g.xlarge", "cache.m6g.2xlarge", "cache.m6g.4xlarge",
    "cache.m6g.8xlarge", "cache.m6g.12xlarge", "cache.m6g.16xlarge", "cache.r6g.large",
    "cache.r6g.xlarge", "cache.r6g.2xlarge", "cache.r6g.4xlarge", "cache.r6g.8xlarge",
    "cache.r6g.12xlarge", "cache.r6g.16xlarge", "cache.r6gd.large", "cache.r6gd.xlarge",
    "cache.r6gd.2xlarge", "cache.r6gd.4xlarge", "cache.r6gd.8xlarge", "cache.r6gd.12xlarge",
    "cache.r6gd.16xlarge", "cache.m7g.large", "cache.m7g.xlarge", "cache.m7g.2xlarge",
    "cache.m7g.4xlarge", "cache.m7g.8xlarge", "cache.m7g.12xlarge", "cache.m7g.16xlarge",
    "cache.r7g.large", "cache.r7g.xlarge", "cache.r7g.2xlarge", "cache.r7g.4xlarge",
    "cache.r7g.8xlarge", "cache.r7g.12xlarge", "cache.r7g.16xlarge",
];

const ELASTICACHE_MIGRATIONS: &[(&str, &str)] = &[
    ("cache.t3.nano", "cache.t4g.nano"),
    ("cache.t3.micro", "cache.t4g.micro"),
    ("cache.t3.small", "cache.t4g.small"),
    ("cache.t3.medium", "cache.t4g.medium"),
    ("cache.m5.large", "cache.m6g.large"),
    ("cache.m5.xlarge", "cache.m6g.xlarge"),
    ("cache.m5.2xlarge", "cache.m6g.2xlarge"),
    ("cache.m5.4xlarge", "cache.m6g.4xlarge"),
    ("cache.m5.12xlarge", "cache.m6g.12xlarge"),
    ("cache.r5.large", "cache.r6g.large"),
    ("cache.r5.xlarge", "cache.r6g.xlarge"),
    ("cache.r5.2xlarge", "cache.r6g.2xlarge"),
    ("cache.r5.4xlarge", "cache.r6g.4xlarge"),
    ("cache.r5.8xlarge", "cache.r6g.8xlarge"),
    ("cache.r5.12xlarge", "cache.r6g.12xlarge"),
    ("cache.r5.16xlarge", "cache.r6g.16xlarge"),
];

pub const ELASTICACHE: CompatibilityTable = CompatibilityTable {
    identity: Arm64Identity::Exact(ELASTICACHE_ARM64_NODE_TYPES),
    migrations: ELASTICACHE_MIGRATIONS,
};

const MEMORYDB_ARM64_NODE_TYPES: &[&str] = &[
    "db.t4g.small", "db.t4g.medium", "db.r6g.large", "db.r6g.xlarge",
    "db.r6g.2xlarge", "db.r6g.4xlarge", "db.r6g.8xlarge", "db.r6g.12xlarge",
    "db.r6g.16xlarge", "db.r6gd.large", "db.r6gd.xlarge", "db.r6gd.2xlarge",
    "db.r6gd.4xlarge", "db.r6gd.8xlarge", "db.r6gd.12xlarge", "db.r6gd.16xlarge",
    "db.r7g.large", "db.r7g.xlarge", "db.r7g.2xlarge", "db.r7g.4xlarge",
    "db.r7g.8xlarge", "db.r7g.12xlarge", "db.r7g.16xlarge",
];

const MEMORYDB_MIGRATIONS: &[(&str, &str)] = &[
    ("db.t3.small", "db.t4g.small"),
    ("db.t3.medium", "db.t4g.medium"),
    ("db.r5.large", "db.r6g.large"),
    ("db.r5.xlarge", "db.r6g.xlarge"),
    ("db.r5.2xlarge", "db.r6g.2xlarge"),
    ("db.r5.4xlarge", "db.r6g.4xlarge"),
    ("db.r5.8xlarge", "db.r6g.8xlarge"),
    ("db.r5.12xlarge", "db.r6g.12xlarge"),
    ("db.r5.16xlarge", "db.r6g.16xlarge"),
];

pub const MEMORYDB: CompatibilityTable = CompatibilityTable {
    identity: Arm64Identity::Exact(MEMORYDB_ARM64_NODE_TYPES),
    migrations: MEMORYDB_MIGRATIONS,
};

// ---------------------------------------------------------------------------
// EMR
// ---------------------------------------------------------------------------

const EMR_ARM64_INSTANCE_TYPES: &[&str] = &[
    "m6g.xlarge", "m6g.2xlarge", "m6g.4xlarge", "m6g.8xlarge",
    "m6g.12xlarge", "m6g.16xlarge", "m6gd.xlarge", "m6gd.2xlarge",
    "m6gd.4xlarge", "m6gd.8xlarge", "m6gd.12xlarge", "m6gd.16xlarge",
    "c6g.xlarge", "c6g.2xlarge", "c6g.4xlarge", "c6g.8xlarge",
    "c6g.12xlarge", "c6g.16xlarge", "c6gd.xlarge", "c6gd.2xlarge",
    "c6gd.4xlarge", "c6gd.8xlarge", "c6gd.12xlarge", "c6gd.16xlarge",
    "r6g.xlarge", "r6g.2xlarge", "r6g.4xlarge", "r6g.8xlarge",
    "r6g.12xlarge", "r6g.16xlarge", "r6gd.xlarge", "r6gd.2xlarge",
    "r6gd.4xlarge", "r6gd.8xlarge", "r6gd.12xlarge", "r6gd.16xlarge",
    "m7g.xlarge", "m7g.2xlarge", "m7g.4xlarge", "m7g.8xlarge",
    "m7g.12xlarge", "m7g.16xlarge", "c7g.xlarge", "c7g.2xlarge",
    "c7g.4xlarge", "c7g.8xlarge", "c7g.12xlarge", "c7g.16xlarge",
    "r7g.xlarge", "r7g.2xlarge", "r7g.4xlarge", "r7g.8xlarge",
    "r7g.12xlarge", "r7g.16xlarge",
];

const EMR_MIGRATIONS: &[(&str, &str)] = &[
    ("m5.xlarge", "m6g.xlarge"),
    ("m5.2xlarge", "m6g.2xlarge"),
    ("m5.4xlarge", "m6g.4xlarge"),
    ("m5.8xlarge", "m6g.8xlarge"),
    ("m5.12xlarge", "m6g.12xlarge"),
    ("m5.16xlarge", "m6g.16xlarge"),
    ("c5.xlarge", "c6g.xlarge"),
    ("c5.2xlarge", "c6g.2xlarge"),
    ("c5.4xlarge", "c6g.4xlarge"),
    ("c5.9xlarge", "c6g.8xlarge"),
    ("c5.12xlarge", "c6g.12xlarge"),
    ("c5.18xlarge", "c6g.16xlarge"),
    ("r5.xlarge", "r6g.xlarge"),
    ("r5.2xlarge", "r6g.2xlarge"),
    ("r5.4xlarge", "r6g.4xlarge"),
    ("r5.8xlarge", "r6g.8xlarge"),
    ("r5.12xlarge", "r6g.12xlarge"),
    ("r5.16xlarge", "r6g.16xlarge"),
];

pub const EMR: CompatibilityTable = CompatibilityTable {
    identity: Arm64Identity::Exact(EMR_ARM64_INSTANCE_TYPES),
    migrations: EMR_MIGRATIONS,
};

// ---------------------------------------------------------------------------
// OpenSearch
// ---------------------------------------------------------------------------

const OPENSEARCH_ARM64_INSTANCE_TYPES: &[&str] = &[
    "t4g.small.search", "t4g.medium.search", "m6g.large.search",
    "m6g.xlarge.search", "m6g.2xlarge.search", "m6g.4xlarge.search",
    "m6g.8xlarge.search", "m6g.12xlarge.search", "c6g.large.search",
    "c6g.xlarge.search", "c6g.2xlarge.search", "c6g.4xlarge.search",
    "c6g.8xlarge.search", "c6g.12xlarge.search", "r6g.large.search",
    "r6g.xlarge.search", "r6g.2xlarge.search", "r6g.4xlarge.search",
    "r6g.8xlarge.search", "r6g.12xlarge.search", "r6gd.large.search",
    "r6gd.xlarge.search", "r6gd.2xlarge.search", "r6gd.4xlarge.search",
    "r6gd.8xlarge.search", "r6gd.12xlarge.search", "r6gd.16xlarge.search",
    "m7g.large.search", "m7g.xlarge.search", "m7g.2xlarge.search",
    "m7g.4xlarge.search", "m7g.8xlarge.search", "m7g.12xlarge.search",
    "m7g.16xlarge.search", "c7g.large.search", "c7g.xlarge.search",
    "c7g.2xlarge.search", "c7g.4xlarge.search", "c7g.8xlarge.search",
    "c7g.12xlarge.search", "c7g.16xlarge.search", "r7g.large.search",
    "r7g.xlarge.search", "r7g.2xlarge.search", "r7g.4xlarge.search",
    "r7g.8xlarge.search", "r7g.12xlarge.search", "r7g.16xlarge.search",
];

const OPENSEARCH_MIGRATIONS: &[(&str, &str)] = &[
    ("t3.small.search", "t4g.small.search"),
    ("t3.medium.search", "t4g.medium.search"),
    ("m5.large.search", "m6g.large.search"),
    ("m5.xlarge.search", "m6g.xlarge.search"),
    ("m5.2xlarge.search", "m6g.2xlarge.search"),
    ("m5.4xlarge.search", "m6g.4xlarge.search"),
    ("m5.8xlarge.search", "m6g.8xlarge.search"),
    ("m5.12xlarge.search", "m6g.12xlarge.search"),
    ("c5.large.search", "c6g.large.search"),
    ("c5.xlarge.search", "c6g.xlarge.search"),
    ("c5.2xlarge.search", "c6g.2xlarge.search"),
    ("c5.4xlarge.search", "c6g.4xlarge.search"),
    ("c5.9xlarge.search", "c6g.8xlarge.search"),
    ("c5.18xlarge.search", "c6g.12xlarge.search"),
    ("r5.large.search", "r6g.large.search"),
    ("r5.xlarge.search", "r6g.xlarge.search"),
    ("r5.2xlarge.search", "r6g.2xlarge.search"),
    ("r5.4xlarge.search", "r6g.4xlarge.search"),
    ("r5.8xlarge.search", "r6g.8xlarge.search"),
    ("r5.12xlarge.search", "r6g.12xlarge.search"),
];

pub const OPENSEARCH: CompatibilityTable = CompatibilityTable {
    identity: Arm64Identity::Exact(OPENSEARCH_ARM64_INSTANCE_TYPES),
    migrations: OPENSEARCH_MIGRATIONS,
};

// ---------------------------------------------------------------------------
// MSK
// ---------------------------------------------------------------------------

const MSK_ARM64_INSTANCE_TYPES: &[&str] = &[
    "kafka.m6g.large", "kafka.m6g.xlarge", "kafka.m6g.2xlarge", "kafka.m6g.4xlarge",
    "kafka.m6g.8xlarge", "kafka.m6g.12xlarge", "kafka.m6g.16xlarge", "kafka.m7g.large",
    "kafka.m7g.xlarge", "kafka.m7g.2xlarge", "kafka.m7g.4xlarge", "kafka.m7g.8xlarge",
    "kafka.m7g.12xlarge", "kafka.m7g.16xlarge",
];

const MSK_MIGRATIONS: &[(&str, &str)] = &[
    ("kafka.m5.large", "kafka.m6g.large"),
    ("kafka.m5.xlarge", "kafka.m6g.xlarge"),
    ("kafka.m5.2xlarge", "kafka.m6g.2xlarge"),
    ("kafka.m5.4xlarge", "kafka.m6g.4xlarge"),
    ("kafka.m5.8xlarge", "kafka.m6g.8xlarge"),
    ("kafka.m5.12xlarge", "kafka.m6g.12xlarge"),
    ("kafka.m5.16xlarge", "kafka.m6g.16xlarge"),
];

pub const MSK: CompatibilityTable = CompatibilityTable {
    identity: Arm64Identity::Exact(MSK_ARM64_INSTANCE_TYPES),
    migrations: MSK_MIGRATIONS,
};

// ---------------------------------------------------------------------------
// SageMaker
// ---------------------------------------------------------------------------

const SAGEMAKER_ARM64_INSTANCE_TYPES: &[&str] = &[
    "ml.m6g.large", "ml.m6g.xlarge", "ml.m6g.2xlarge", "ml.m6g.4xlarge",
    "ml.m6g.8xlarge", "ml.m6g.12xlarge", "ml.m6g.16xlarge", "ml.m6gd.large",
    "ml.m6gd.xlarge", "ml.m6gd.2xlarge", "ml.m6gd.4xlarge", "ml.m6gd.8xlarge",
    "ml.m6gd.12xlarge", "ml.m6gd.16xlarge", "ml.c6g.large", "ml.c6g.xlarge",
    "ml.c6g.2xlarge", "ml.c6g.4xlarge", "ml.c6g.8xlarge", "ml.c6g.12xlarge",
    "ml.c6g.16xlarge", "ml.c6gd.large", "ml.c6gd.xlarge", "ml.c6gd.2xlarge",
    "ml.c6gd.4xlarge", "ml.c6gd.8xlarge", "ml.c6gd.12xlarge", "ml.c6gd.16xlarge",
    "ml.r6g.large", "ml.r6g.xlarge", "ml.r6g.2xlarge", "ml.r6g.4xlarge",
    "ml.r6g.8xlarge", "ml.r6g.12xlarge", "ml.r6g.16xlarge", "ml.r6gd.large",
    "ml.r6gd.xlarge", "ml.r6gd.2xlarge", "ml.r6gd.4xlarge", "ml.r6gd.8xlarge",
    "ml.r6gd.12xlarge", "ml.r6gd.16xlarge",
];

const SAGEMAKER_MIGRATIONS: &[(&str, &str)] = &[
    ("ml.m5.large", "ml.m6g.large"),
    ("ml.m5.xlarge", "ml.m6g.xlarge"),
    ("ml.m5.2xlarge", "ml.m6g.2xlarge"),
    ("ml.m5.4xlarge", "ml.m6g.4xlarge"),
    ("ml.m5.8xlarge", "ml.m6g.8xlarge"),
    ("ml.m5.12xlarge", "ml.m6g.12xlarge"),
    ("ml.m5.16xlarge", "ml.m6g.16xlarge"),
    ("ml.c5.large", "ml.c6g.large"),
    ("ml.c5.xlarge", "ml.c6g.xlarge"),
    ("ml.c5.2xlarge", "ml.c6g.2xlarge"),
    ("ml.c5.4xlarge", "ml.c6g.4xlarge"),
    ("ml.c5.9xlarge", "ml.c6g.8xlarge"),
    ("ml.c5.18xlarge", "ml.c6g.16xlarge"),
    ("ml.r5.large", "ml.r6g.large"),
    ("ml.r5.xlarge", "ml.r6g.xlarge"),
    ("ml.r5.2xlarge", "ml.r6g.2xlarge"),
    ("ml.r5.4xlarge", "ml.r6g.4xlarge"),
    ("ml.r5.8xlarge", "ml.r6g.8xlarge"),
    ("ml.r5.12xlarge", "ml.r6g.12xlarge"),
    ("ml.r5.16xlarge", "ml.r6g.16xlarge"),
];

pub const SAGEMAKER: CompatibilityTable = CompatibilityTable {
    identity: Arm64Identity::Exact(SAGEMAKER_ARM64_INSTANCE_TYPES),
    migrations: SAGEMAKER_MIGRATIONS,
};

// ---------------------------------------------------------------------------
// GameLift
// ---------------------------------------------------------------------------

const GAMELIFT_ARM64_INSTANCE_TYPES: &[&str] = &[
    "c6g.large", "c6g.xlarge", "c6g.2xlarge", "c6g.4xlarge",
    "c6g.8xlarge", "c6g.12xlarge", "c6g.16xlarge", "m6g.large",
    "m6g.xlarge", "m6g.2xlarge", "m6g.4xlarge", "m6g.8xlarge",
    "m6g.12xlarge", "m6g.16xlarge", "r6g.large", "r6g.xlarge",
    "r6g.2xlarge", "r6g.4xlarge", "r6g.8xlarge", "r6g.12xlarge",
    "r6g.16xlarge", "c7g.large", "c7g.xlarge", "c7g.2xlarge",
    "c7g.4xlarge", "c7g.8xlarge", "c7g.12xlarge", "c7g.16xlarge",
    "m7g.large", "m7g.xlarge", "m7g.2xlarge", "m7g.4xlarge",
    "m7g.8xlarge", "m7g.12xlarge", "m7g.16xlarge", "r7g.large",
    "r7g.xlarge", "r7g.2xlarge", "r7g.4xlarge", "r7g.8xlarge",
    "r7g.12xlarge", "r7g.16xlarge",
];

const GAMELIFT_MIGRATIONS: &[(&str, &str)] = &[
    ("c5.large", "c6g.large"),
    ("c5.xlarge", "c6g.xlarge"),
    ("c5.2xlarge", "c6g.2xlarge"),
    ("c5.4xlarge", "c6g.4xlarge"),
    ("c5.9xlarge", "c6g.8xlarge"),
    ("c5.12xlarge", "c6g.12xlarge"),
    ("c5.18xlarge", "c6g.16xlarge"),
    ("m5.large", "m6g.large"),
    ("m5.xlarge", "m6g.xlarge"),
    ("m5.2xlarge", "m6g.2xlarge"),
    ("m5.4xlarge", "m6g.4xlarge"),
    ("m5.8xlarge", "m6g.8xlarge"),
    ("m5.12xlarge", "m6g.12xlarge"),
    ("m5.16xlarge", "m6g.16xlarge"),
    ("r5.large", "r6g.large"),
    ("r5.xlarge", "r6g.xlarge"),
    ("r5.2xlarge", "r6g.2xlarge"),
    ("r5.4xlarge", "r6g.4xlarge"),
    ("r5.8xlarge", "r6g.8xlarge"),
    ("r5.12xlarge", "r6g.12xlarge"),
    ("r5.16xlarge", "r6g.16xlarge"),
];

pub const GAMELIFT: CompatibilityTable = CompatibilityTable {
    identity: Arm64Identity::Exact(GAMELIFT_ARM64_INSTANCE_TYPES),
    migrations: GAMELIFT_MIGRATIONS,
};

// ---------------------------------------------------------------------------
// CodeBuild
// ---------------------------------------------------------------------------

const CODEBUILD_ARM64_COMPUTE_TYPES: &[&str] = &[
    "BUILD_GENERAL1_SMALL_ARM",
    "BUILD_GENERAL1_MEDIUM_ARM",
    "BUILD_GENERAL1_LARGE_ARM",
    "BUILD_GENERAL1_2XLARGE_ARM",
];

const CODEBUILD_MIGRATIONS: &[(&str, &str)] = &[
    ("BUILD_GENERAL1_SMALL", "BUILD_GENERAL1_SMALL_ARM"),
    ("BUILD_GENERAL1_MEDIUM", "BUILD_GENERAL1_MEDIUM_ARM"),
    ("BUILD_GENERAL1_LARGE", "BUILD_GENERAL1_LARGE_ARM"),
    ("BUILD_GENERAL1_2XLARGE", "BUILD_GENERAL1_2XLARGE_ARM"),
];

pub const CODEBUILD: CompatibilityTable = CompatibilityTable {
    identity: Arm64Identity::Exact(CODEBUILD_ARM64_COMPUTE_TYPES),
    migrations: CODEBUILD_MIGRATIONS,
};
