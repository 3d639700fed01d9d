use log::debug;

use crate::config::EngineConfig;
use crate::expression::Expression;
use crate::parser::errors::ParseError;

/// Operator groups from loosest to tightest binding
const PRECEDENCE_LEVELS: [&[char]; 3] = [&['+', '-'], &['*', '/'], &['^']];

/// Parses a pre-validated expression with the default depth limit.
///
/// # Errors
///
/// Returns an error if a leaf is not an integer (including an empty leaf left
/// by a stray operator) or the tree would be deeper than the limit.
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    parse_with_config(input, &EngineConfig::default())
}

/// # Errors
///
/// Same as [`parse`], using `config.max_depth` as the limit.
pub fn parse_with_config(input: &str, config: &EngineConfig) -> Result<Expression, ParseError> {
    debug!("Parsing expression: '{}'", input);
    let result = parse_level(input, 1, config.max_depth);
    match &result {
        Ok(expr) => debug!("Parsed '{}' into tree of depth {}", input, expr.depth()),
        Err(e) => debug!("Parsing '{}' failed: {}", input, e),
    }
    result
}

/// The rightmost operator of the loosest group present becomes the root, so
/// chains of equal precedence associate to the left.
fn parse_level(text: &str, depth: usize, limit: usize) -> Result<Expression, ParseError> {
    if depth > limit {
        return Err(ParseError::DepthExceeded { limit });
    }

    for operators in PRECEDENCE_LEVELS {
        if let Some((index, symbol)) = text.char_indices().rev().find(|(_, c)| operators.contains(c)) {
            let left = text.get(..index).unwrap_or_default();
            let right = text.get(index + symbol.len_utf8()..).unwrap_or_default();
            return Ok(Expression::op(
                symbol,
                parse_level(left, depth + 1, limit)?,
                parse_level(right, depth + 1, limit)?,
            ));
        }
    }

    let value = text
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidNumber(text.to_string()))?;
    Ok(Expression::constant(value as f64))
}
