//! Tagged token stream form of expression trees
//!
//! Every node is written as its type tag followed by its own tokens, parents
//! before children:
//!
//! ```text
//! Op + Constant 3 Parentheses Op * Variable x Constant 4
//! ```
//!
//! Reading is driven entirely by [`LoaderRegistry`]: the leading tag picks
//! the loader, and the loader pulls its node's tokens and children.

mod errors;
mod loaders;
mod registry;
mod stream;

pub use errors::{LoadError, SaveError};
pub use loaders::{load_constant, load_op, load_parentheses, load_variable};
pub use registry::{LoadCursor, Loader, LoaderRegistry};
pub use stream::TokenStream;

use crate::config::EngineConfig;
use crate::expression::Expression;
use crate::visitor::SaveVisitor;

/// Reads one expression with the global registry, leaving later tokens in
/// the stream.
///
/// # Errors
///
/// See [`LoaderRegistry::load`].
pub fn load(stream: &mut TokenStream<'_>) -> Result<Expression, LoadError> {
    LoaderRegistry::global().load(stream, &EngineConfig::default())
}

/// Reads exactly one expression from `text` with the global registry.
///
/// # Errors
///
/// See [`LoaderRegistry::load_str`].
pub fn load_str(text: &str) -> Result<Expression, LoadError> {
    LoaderRegistry::global().load_str(text, &EngineConfig::default())
}

/// # Errors
///
/// Returns an error if a variable name or operator cannot be written as a
/// single token, or the tree is too deep.
pub fn save(expr: &Expression) -> Result<String, SaveError> {
    save_with_config(expr, &EngineConfig::default())
}

/// # Errors
///
/// Same as [`save`], using `config.max_depth` as the limit.
pub fn save_with_config(expr: &Expression, config: &EngineConfig) -> Result<String, SaveError> {
    let mut saver = SaveVisitor::with_config(config);
    expr.accept(&mut saver);
    saver.finish()
}
