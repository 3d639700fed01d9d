use thiserror::Error;

use crate::parser::ParseError;
use crate::serialization::LoadError;
use crate::utils::ValidationError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid Input")]
    InvalidInput(#[from] ValidationError),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Load error: {0}")]
    Load(#[from] LoadError),
}

