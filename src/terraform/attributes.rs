use serde::Deserialize;
use serde_json::{Map, Value};

/// Attribute bag of a single resource instance in the state file.
///
/// Terraform stores attributes as untyped JSON. Every accessor returns `None`
/// when the key is missing *or* holds a value of a different shape, so callers
/// can skip malformed instances without special error handling. A non-object
/// `attributes` value (e.g. `null`) deserializes to an empty bag.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    /// Returns true if the key is present, regardless of its value.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.as_str()
    }

    pub fn list(&self, key: &str) -> Option<&[Value]> {
        self.0.get(key)?.as_array().map(Vec::as_slice)
    }

    /// Returns the first element of a list attribute as a string.
    ///
    /// Used for attributes like `architectures` or `instance_types`.
    pub fn first_list_string(&self, key: &str) -> Option<&str> {
        self.list(key)?.first()?.as_str()
    }

    /// Returns the first element of a nested block.
    ///
    /// Terraform encodes nested blocks (e.g. `cluster_config`) as a list of
    /// objects, even when at most one block is allowed.
    pub fn first_block(&self, key: &str) -> Option<&Map<String, Value>> {
        self.list(key)?.first()?.as_object()
    }

    /// Returns a string field from the first element of a nested block.
    pub fn block_string(&self, block: &str, field: &str) -> Option<&str> {
        self.first_block(block)?.get(field)?.as_str()
    }
}

impl From<Value> for Attributes {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}
