//! Input checks run before parsing

mod errors;
mod validation;

pub use errors::ValidationError;
pub use validation::{ArithmeticSyntax, OPERATORS, SyntaxOracle, validate_expression_syntax};
