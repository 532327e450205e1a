use std::path::Path;

use log::debug;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use super::attributes::Attributes;

/// Errors raised while loading a Terraform state file.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to read state file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("state file is empty")]
    Empty,

    #[error("failed to parse JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid state file: version is missing or zero")]
    MissingVersion,
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Root of a `terraform.tfstate` document.
#[derive(Debug, Deserialize)]
pub struct TerraformState {
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: u64,
    #[serde(default)]
    pub terraform_version: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resources: Vec<TerraformResource>,
}

/// A resource entry from the state file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TerraformResource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub mode: String, // "managed" or "data"
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub resource_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub provider: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instances: Vec<ResourceInstance>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceInstance {
    #[serde(default)]
    pub attributes: Attributes,
}

impl TerraformResource {
    /// Returns the Terraform address, e.g. `module.web.aws_instance.example`.
    pub fn full_address(&self) -> String {
        match self.module.as_deref() {
            Some(module) if !module.is_empty() => {
                format!("{}.{}.{}", module, self.resource_type, self.name)
            }
            _ => format!("{}.{}", self.resource_type, self.name),
        }
    }

    pub fn is_managed(&self) -> bool {
        self.mode == "managed"
    }
}

impl TerraformState {
    /// Parses and validates the contents of a state file.
    pub fn parse(content: &str) -> Result<Self, StateError> {
        if content.trim().is_empty() {
            return Err(StateError::Empty);
        }

        let state: TerraformState = serde_json::from_str(content)?;

        if state.version == 0 {
            return Err(StateError::MissingVersion);
        }

        debug!(
            "Parsed state version {} (terraform {}) with {} resources",
            state.version,
            state.terraform_version.as_deref().unwrap_or("unknown"),
            state.resources.len()
        );

        Ok(state)
    }

    /// Reads and parses a state file from disk.
    pub fn from_file(path: &Path) -> Result<Self, StateError> {
        let content = std::fs::read_to_string(path).map_err(|source| StateError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::parse(&content)
    }
}
