//! Integration tests for the tf-arm CLI.
//!
//! State files live in `tests/fixtures`; error cases write their input to
//! temporary files.

#![allow(deprecated)] // cargo_bin is deprecated but works fine for standard builds

use assert_cmd::Command;
use predicates::prelude::*;

const MIXED_STATE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/mixed.tfstate");
const ARM64_STATE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/arm64.tfstate");

fn tf_arm() -> Command {
    let mut command = Command::cargo_bin("tf-arm").unwrap();
    command.env_remove("TF_ARM_FORMAT").env_remove("TF_ARM_EXIT_CODE");
    command
}

fn state_file(content: &str) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(file.path(), content).expect("Failed to write state file");
    file
}

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_no_args_prints_help() {
    tf_arm()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("Terraform State ARM64 Analyzer"));
}

#[test]
fn test_help_lists_supported_resources() {
    tf_arm()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("aws_instance"))
        .stdout(predicate::str::contains("aws_gamelift_fleet"));
}

#[test]
fn test_help_shows_all_options() {
    tf_arm()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--exit-code"))
        .stdout(predicate::str::contains("--no-color"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--version"));
}

#[test]
fn test_version() {
    tf_arm()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_short_flag() {
    tf_arm()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("tf-arm"));
}

// ============================================================================
// Input errors
// ============================================================================

#[test]
fn test_nonexistent_state_file_fails() {
    tf_arm()
        .arg("/nonexistent/terraform.tfstate")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "State file '/nonexistent/terraform.tfstate' does not exist",
        ));
}

#[test]
fn test_directory_as_state_file_fails() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    tf_arm()
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a file"));
}

#[test]
fn test_empty_state_file_fails() {
    let file = state_file("");
    tf_arm()
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("state file is empty"));
}

#[test]
fn test_invalid_json_fails() {
    let file = state_file("invalid json");
    tf_arm()
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse JSON"));
}

#[test]
fn test_missing_version_fails() {
    let file = state_file(r#"{"resources": []}"#);
    tf_arm()
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("version is missing or zero"));
}

#[test]
fn test_invalid_format_is_rejected() {
    tf_arm()
        .args(["--format", "yaml", MIXED_STATE])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ============================================================================
// Text output
// ============================================================================

#[test]
fn test_text_output_banner_and_header() {
    tf_arm()
        .args(["--no-color", MIXED_STATE])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "tf-arm: Terraform State ARM64 Analyzer\n",
        ))
        .stdout(predicate::str::contains(format!(
            "Analyzing Terraform state file: {}",
            MIXED_STATE
        )))
        .stdout(predicate::str::contains(format!(
            "Found 6 resources\n{}\n",
            "=".repeat(80)
        )));
}

#[test]
fn test_text_output_resource_blocks() {
    tf_arm()
        .args(["-n", MIXED_STATE])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Resource: aws_instance.web\n  Current Architecture: X86_64\n  ARM64 Compatible: true\n  Recommended: t4g.micro\n  Notes: Can migrate to ARM64 instance type t4g.micro\n",
        ))
        .stdout(predicate::str::contains(
            "Resource: module.api.aws_lambda_function.handler\n  Current Architecture: ARM64\n",
        ))
        .stdout(predicate::str::contains(
            "Resource: aws_db_instance.legacy\n  Current Architecture: X86_64\n  ARM64 Compatible: false\n  Notes: No ARM64 compatible instance class available\n",
        ))
        .stdout(predicate::str::contains(
            "  Notes: Fargate supports ARM64. Check task definition cpu_architecture",
        ));
}

#[test]
fn test_text_output_skips_data_sources_and_unsupported() {
    tf_arm()
        .args(["-n", MIXED_STATE])
        .assert()
        .success()
        .stdout(predicate::str::contains("aws_ami").not())
        .stdout(predicate::str::contains("aws_s3_bucket").not());
}

#[test]
fn test_text_output_summary() {
    tf_arm()
        .args(["--no-color", MIXED_STATE])
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis Summary:"))
        .stdout(predicate::str::contains("  Total analyzed resources: 4"))
        .stdout(predicate::str::contains("  ARM64 compatible resources: 3"))
        .stdout(predicate::str::contains("  Resources already using ARM64: 1"))
        .stdout(predicate::str::contains("  Resources that can migrate to ARM64: 2"))
        .stdout(predicate::str::contains("  Compatibility rate: 75.0%"))
        .stdout(predicate::str::contains(
            "  Percentage of ARM64-capable resources not using ARM64: 66.7%",
        ));
}

#[test]
fn test_no_color_output_has_no_escape_codes() {
    tf_arm()
        .args(["--no-color", MIXED_STATE])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_empty_resource_list() {
    let file = state_file(r#"{"version": 4, "resources": []}"#);
    tf_arm()
        .args(["-n"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 resources"))
        .stdout(predicate::str::contains("  Total analyzed resources: 0"))
        .stdout(predicate::str::contains("Compatibility rate").not());
}

#[test]
fn test_verbose_logs_to_stderr() {
    tf_arm()
        .args(["--verbose", "-n", "--format", "json", MIXED_STATE])
        .assert()
        .success()
        .stderr(predicate::str::contains("aws_instance.web"));
}

// ============================================================================
// JSON output
// ============================================================================

#[test]
fn test_json_output() {
    let output = tf_arm()
        .args(["--format", "json", MIXED_STATE])
        .output()
        .expect("Failed to run tf-arm");
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");

    let summary = &parsed["summary"];
    assert_eq!(summary["total_analyzed"], 4);
    assert_eq!(summary["arm64_compatible"], 3);
    assert_eq!(summary["migrateable"], 2);
    assert_eq!(summary["compatibility_rate"], 75.0);

    let resources = parsed["resources"].as_array().unwrap();
    let addresses: Vec<_> = resources
        .iter()
        .map(|resource| resource["full_address"].as_str().unwrap())
        .collect();
    assert_eq!(
        addresses,
        [
            "aws_instance.web",
            "module.api.aws_lambda_function.handler",
            "aws_db_instance.legacy",
            "aws_ecs_service.app",
        ]
    );
    assert_eq!(resources[0]["recommended_arch"], "t4g.micro");
    assert_eq!(resources[1]["already_using_arm64"], true);
}

#[test]
fn test_json_output_short_flag_has_no_banner() {
    tf_arm()
        .args(["-f", "json", ARM64_STATE])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("tf-arm:").not());
}

#[test]
fn test_format_from_environment() {
    tf_arm()
        .env("TF_ARM_FORMAT", "json")
        .arg(ARM64_STATE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"summary\""));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_exit_code_when_migrateable_found() {
    tf_arm()
        .args(["--exit-code", "3", "-n", MIXED_STATE])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Analysis Summary:"));
}

#[test]
fn test_exit_code_with_json_output() {
    tf_arm()
        .args(["--exit-code", "2", "--format", "json", MIXED_STATE])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"migrateable\": 2"));
}

#[test]
fn test_exit_code_ignored_when_nothing_to_migrate() {
    tf_arm()
        .args(["--exit-code", "3", ARM64_STATE])
        .assert()
        .success();
}

#[test]
fn test_default_exit_code_is_zero_with_migrateable() {
    tf_arm().arg(MIXED_STATE).assert().success();
}

#[test]
fn test_exit_code_zero_is_ignored() {
    tf_arm()
        .args(["--exit-code", "0", MIXED_STATE])
        .assert()
        .success();
}
