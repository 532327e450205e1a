use std::path::PathBuf;

use clap::Parser;

/// Terraform State ARM64 Analyzer
///
/// Reads a Terraform state file and reports which AWS resources already run
/// on ARM64 (Graviton) and which could migrate.
///
/// Supported resources:
///   - Amazon EC2 (aws_instance, aws_launch_template)
///   - Amazon ECS (aws_ecs_task_definition, aws_ecs_service)
///   - AWS Lambda (aws_lambda_function)
///   - AWS CodeBuild (aws_codebuild_project)
///   - Amazon RDS (aws_db_instance, aws_rds_cluster)
///   - Amazon ElastiCache (aws_elasticache_cluster)
///   - Amazon MemoryDB (aws_memorydb_cluster)
///   - Amazon EKS (aws_eks_node_group)
///   - Amazon EMR (aws_emr_cluster, aws_emrserverless_application)
///   - Amazon OpenSearch (aws_opensearch_domain)
///   - Amazon MSK (aws_msk_cluster)
///   - Amazon SageMaker (aws_sagemaker_endpoint_configuration)
///   - Amazon GameLift (aws_gamelift_fleet)
#[derive(Parser, Debug)]
#[command(name = "tf-arm")]
#[command(version, disable_version_flag = true)]
#[command(about, long_about, verbatim_doc_comment)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    pub version: Option<bool>,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        env = "TF_ARM_FORMAT",
        default_value = "text"
    )]
    pub format: OutputFormat,

    /// Exit with this code when resources that can migrate to ARM64 are found
    #[arg(long = "exit-code", env = "TF_ARM_EXIT_CODE", default_value_t = 0)]
    pub exit_code: i32,

    /// Suppress colored output (useful for CI/CD pipelines)
    #[arg(short = 'n', long = "no-color")]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long = "verbose")]
    pub verbose: bool,

    /// Path to the Terraform state file (terraform.tfstate)
    pub state_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
