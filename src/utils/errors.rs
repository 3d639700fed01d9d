use thiserror::Error;

/// Reasons the syntax check rejects an input string
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Expression cannot be empty")]
    Empty,
    #[error("Whitespace is not allowed (at position {0})")]
    Whitespace(usize),
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("Operator '{operator}' at position {position} has no left operand")]
    MisplacedOperator { operator: char, position: usize },
    #[error("Expression ends with operator '{0}'")]
    TrailingOperator(char),
}
