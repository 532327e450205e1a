use thiserror::Error;

use crate::output::OutputError;
use crate::terraform::StateError;

#[derive(Error, Debug)]
pub enum TfArmError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Error parsing state file: {0}")]
    State(#[from] StateError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

pub type Result<T> = std::result::Result<T, TfArmError>;
