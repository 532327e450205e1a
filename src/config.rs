use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};
use crate::error::{Result, TfArmError};

#[derive(Debug)]
pub struct Config {
    pub no_color: bool,
    /// Absolute path of the state file.
    pub state_file: PathBuf,
    /// State file path as given on the command line, used in reports.
    pub display_path: String,
    pub output_format: OutputFormat,
    pub exit_code: i32,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let Some(given) = cli.state_file else {
            return Err(TfArmError::Config("No state file given".to_string()));
        };
        let display_path = given.display().to_string();
        let state_file = Self::resolve_path(&given)?;

        if !state_file.exists() {
            return Err(TfArmError::Config(format!(
                "State file '{}' does not exist",
                display_path
            )));
        }

        if !state_file.is_file() {
            return Err(TfArmError::Config(format!(
                "State file '{}' is not a file",
                display_path
            )));
        }

        Ok(Self {
            no_color: cli.no_color,
            state_file,
            display_path,
            output_format: cli.format,
            exit_code: cli.exit_code,
        })
    }

    /// Resolves a path to an absolute path.
    /// - Absolute paths are returned as-is
    /// - Relative paths are resolved relative to current directory
    pub fn resolve_path(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir().map_err(|e| {
                TfArmError::Config(format!("Cannot determine current directory: {}", e))
            })?;
            Ok(current_dir.join(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(state_file: Option<PathBuf>) -> Cli {
        Cli {
            version: None,
            format: OutputFormat::Text,
            exit_code: 0,
            no_color: false,
            verbose: false,
            state_file,
        }
    }

    #[test]
    fn from_cli_with_existing_file() {
        let temp_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        let path = temp_file.path().to_path_buf();

        let config = Config::from_cli(cli(Some(path.clone()))).expect("Config creation should succeed");

        assert!(!config.no_color);
        assert_eq!(config.state_file, path);
        assert_eq!(config.display_path, path.display().to_string());
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.exit_code, 0);
    }

    #[test]
    fn from_cli_carries_options() {
        let temp_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        let mut options = cli(Some(temp_file.path().to_path_buf()));
        options.format = OutputFormat::Json;
        options.exit_code = 2;
        options.no_color = true;

        let config = Config::from_cli(options).expect("Config creation should succeed");

        assert!(config.no_color);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.exit_code, 2);
    }

    #[test]
    fn from_cli_without_state_file_fails() {
        let result = Config::from_cli(cli(None));
        assert!(matches!(result, Err(TfArmError::Config(_))));
    }

    #[test]
    fn from_cli_nonexistent_file_fails() {
        let result = Config::from_cli(cli(Some(PathBuf::from(
            "/nonexistent/path/terraform.tfstate",
        ))));

        let error_message = result.unwrap_err().to_string();
        assert!(error_message.contains("State file '/nonexistent/path/terraform.tfstate' does not exist"));
    }

    #[test]
    fn from_cli_directory_fails() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

        let result = Config::from_cli(cli(Some(temp_dir.path().to_path_buf())));

        let error_message = result.unwrap_err().to_string();
        assert!(error_message.contains("is not a file"));
    }

    #[test]
    fn from_cli_keeps_relative_display_path() {
        let temp_dir = tempfile::TempDir::new_in(".").expect("Failed to create temp dir");
        let relative = PathBuf::from(".")
            .join(temp_dir.path().file_name().unwrap())
            .join("terraform.tfstate");
        std::fs::write(&relative, "{}").unwrap();

        let config = Config::from_cli(cli(Some(relative.clone()))).unwrap();

        assert!(config.state_file.is_absolute());
        assert_eq!(config.display_path, relative.display().to_string());
    }

    #[test]
    fn resolve_absolute_path_unchanged() {
        let absolute_path = PathBuf::from("/absolute/path/to/terraform.tfstate");
        let result = Config::resolve_path(&absolute_path).expect("Resolution should succeed");
        assert_eq!(result, absolute_path);
    }

    #[test]
    fn resolve_relative_path_becomes_absolute() {
        let relative_path = PathBuf::from("relative/terraform.tfstate");
        let result = Config::resolve_path(&relative_path).expect("Resolution should succeed");

        assert!(result.is_absolute());
        assert!(result.ends_with("relative/terraform.tfstate"));
    }
}
