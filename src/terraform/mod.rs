mod attributes;
mod state;

pub use attributes::Attributes;
pub use state::{ResourceInstance, StateError, TerraformResource, TerraformState};
