//! Visitor Calc - arithmetic expression trees with pluggable operations
//!
//! Input strings are checked, parsed into an [`Expression`] tree and then
//! walked by [`Visitor`] implementations: one computes a value, one renders a
//! fully parenthesized form, one writes the tagged token stream that
//! [`LoaderRegistry`] reads back.

pub mod bindings;
pub mod config;
pub mod engine;
pub mod expression;
pub mod parser;
pub mod serialization;
pub mod utils;
pub mod visitor;

// Re-export the main public API
pub use bindings::{BindingError, Bindings, parse_binding};
pub use config::{DEFAULT_MAX_DEPTH, EngineConfig};
pub use engine::{EngineError, Evaluation, ExpressionEngine};
pub use expression::{Constant, Expression, Op, Parentheses, Variable};
pub use parser::{ParseError, parse};
pub use serialization::{LoadError, LoaderRegistry, SaveError, TokenStream, load, load_str, save};
pub use utils::{ArithmeticSyntax, SyntaxOracle, ValidationError, validate_expression_syntax};
pub use visitor::{ComputeVisitor, Diagnostic, PrettyPrintVisitor, SaveVisitor, Visitor};

/// Check, parse and evaluate an expression string
///
/// This is a convenience function that runs a default engine: the built-in
/// syntax check, the default depth limit, and both the compute and pretty
/// print visitors over the parsed tree.
///
/// # Arguments
///
/// * `input` - Digit runs joined by `+ - * / ^`, without whitespace
/// * `bindings` - Values for any variables in the tree
///
/// # Returns
///
/// * `Ok(Evaluation)` - The numeric result, the canonical form and any
///   diagnostics raised while computing
/// * `Err(EngineError::InvalidInput)` - If the syntax check rejects the input
/// * `Err(EngineError::Parse)` - If a leaf cannot be read as a number
///
/// # Errors
///
/// This function will return an error if:
/// * The input is empty or only whitespace
/// * The input is not a well-formed operator chain
/// * The parsed tree would exceed the default depth limit
///
/// # Examples
///
/// ```
/// use visitor_calc::{Bindings, evaluate_expression};
///
/// match evaluate_expression("11-8/4*3+2", &Bindings::new()) {
///     Ok(evaluation) => println!("{} = {}", evaluation.pretty_print, evaluation.result),
///     Err(e) => println!("{}", e),
/// }
/// ```
pub fn evaluate_expression(input: &str, bindings: &Bindings) -> Result<Evaluation, EngineError> {
    ExpressionEngine::new().evaluate(input, bindings)
}
