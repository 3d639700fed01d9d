use thiserror::Error;

/// Problems found while evaluating a tree. Evaluation carries on with a
/// fallback value after each one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Diagnostic {
    #[error("Variable {0} not defined.")]
    UndefinedVariable(String),
    #[error("Invalid Operand {0}")]
    UnknownOperator(char),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Expression deeper than {limit} levels")]
    DepthExceeded { limit: usize },
}
