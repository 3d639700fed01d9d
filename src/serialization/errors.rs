use thiserror::Error;

/// Errors that abort loading a tree from a token stream
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Found unexpected token {0}")]
    UnregisteredTag(String),
    #[error("Stream ended at token {position}, expected {expected}")]
    UnexpectedEnd {
        expected: &'static str,
        position: usize,
    },
    #[error("Not a valid number: '{0}'")]
    InvalidNumber(String),
    #[error("Operator must be a single character: '{0}'")]
    InvalidOperator(String),
    #[error("Serialized tree nests deeper than {limit} levels")]
    DepthExceeded { limit: usize },
    #[error("Unexpected tokens after expression: '{0}'")]
    TrailingTokens(String),
}

/// Errors that stop a tree from being written
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SaveError {
    #[error("Variable name cannot be written as a single token: '{0}'")]
    UnsavableName(String),
    #[error("Operator cannot be written as a token: '{0}'")]
    UnsavableOperator(char),
    #[error("Expression deeper than {limit} levels")]
    DepthExceeded { limit: usize },
}
