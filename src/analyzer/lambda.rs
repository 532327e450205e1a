use super::{ARCH_ARM64, ARCH_X86_64, ARCH_X86_64_DEFAULT, Analyzer, Arm64Analysis};
use crate::terraform::TerraformResource;

/// Lambda functions switch architecture through the `architectures` list.
pub struct LambdaAnalyzer;

impl Analyzer for LambdaAnalyzer {
    fn supported_type(&self) -> &'static str {
        "aws_lambda_function"
    }

    fn analyze(&self, resource: &TerraformResource) -> Arm64Analysis {
        let mut analysis = Arm64Analysis::for_resource(resource)
            .with_current_arch(ARCH_X86_64_DEFAULT)
            .recommending_arm64();
        analysis.notes = "Can add architectures = [\"arm64\"]".to_string();

        for instance in &resource.instances {
            let attributes = &instance.attributes;
            if attributes.list("architectures").is_none() {
                continue;
            }

            if attributes.first_list_string("architectures") == Some("arm64") {
                analysis.current_arch = ARCH_ARM64.to_string();
                analysis.already_using_arm64 = true;
                analysis.notes = "Already using ARM64 architecture".to_string();
            } else {
                analysis.current_arch = ARCH_X86_64.to_string();
                analysis.already_using_arm64 = false;
                analysis.notes = "Can change architectures to [\"arm64\"]".to_string();
            }
        }
        analysis
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::resource;
    use super::*;
    use serde_json::{Value, json};

    fn lambda(attributes: Value) -> Arm64Analysis {
        LambdaAnalyzer.analyze(&resource("aws_lambda_function", "fn", vec![attributes]))
    }

    #[test]
    fn arm64_function() {
        let analysis = lambda(json!({"architectures": ["arm64"]}));

        assert!(analysis.arm64_compatible);
        assert!(analysis.already_using_arm64);
        assert_eq!(analysis.current_arch, "ARM64");
        assert_eq!(analysis.recommended_arch, "ARM64");
        assert_eq!(analysis.notes, "Already using ARM64 architecture");
    }

    #[test]
    fn x86_function() {
        let analysis = lambda(json!({"architectures": ["x86_64"]}));

        assert!(analysis.arm64_compatible);
        assert!(!analysis.already_using_arm64);
        assert_eq!(analysis.current_arch, "X86_64");
        assert_eq!(analysis.notes, "Can change architectures to [\"arm64\"]");
    }

    #[test]
    fn empty_architectures_counts_as_x86() {
        let analysis = lambda(json!({"architectures": []}));

        assert_eq!(analysis.current_arch, "X86_64");
        assert!(!analysis.already_using_arm64);
    }

    #[test]
    fn missing_architectures_uses_default() {
        let analysis = lambda(json!({"function_name": "handler"}));

        assert!(analysis.arm64_compatible);
        assert_eq!(analysis.current_arch, "X86_64 (default)");
        assert_eq!(analysis.recommended_arch, "ARM64");
        assert_eq!(analysis.notes, "Can add architectures = [\"arm64\"]");
    }

    #[test]
    fn non_list_architectures_is_skipped() {
        let analysis = lambda(json!({"architectures": "arm64"}));

        assert!(!analysis.already_using_arm64);
        assert_eq!(analysis.current_arch, "X86_64 (default)");
    }

    #[test]
    fn only_first_architecture_counts() {
        let analysis = lambda(json!({"architectures": ["x86_64", "arm64"]}));
        assert!(!analysis.already_using_arm64);
    }
}
