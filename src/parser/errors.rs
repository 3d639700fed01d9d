use thiserror::Error;

/// Errors that abort parsing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Not a valid number: '{0}'")]
    InvalidNumber(String),
    #[error("Expression nests deeper than {limit} levels")]
    DepthExceeded { limit: usize },
}
