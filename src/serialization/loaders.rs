use crate::expression::Expression;
use crate::serialization::errors::LoadError;
use crate::serialization::registry::LoadCursor;

/// `Constant <number>`
pub fn load_constant(cursor: &mut LoadCursor<'_, '_>) -> Result<Expression, LoadError> {
    let token = cursor.next_token("number")?;
    let value = token
        .parse::<f64>()
        .map_err(|_| LoadError::InvalidNumber(token.to_string()))?;
    Ok(Expression::constant(value))
}

/// `Variable <name>`
pub fn load_variable(cursor: &mut LoadCursor<'_, '_>) -> Result<Expression, LoadError> {
    let name = cursor.next_token("variable name")?;
    Ok(Expression::variable(name))
}

/// `Parentheses <expression>`
pub fn load_parentheses(cursor: &mut LoadCursor<'_, '_>) -> Result<Expression, LoadError> {
    let inner = cursor.load_expression()?;
    Ok(Expression::parentheses(inner))
}

/// `Op <symbol> <expression> <expression>`
pub fn load_op(cursor: &mut LoadCursor<'_, '_>) -> Result<Expression, LoadError> {
    let token = cursor.next_token("operator")?;
    let mut chars = token.chars();
    let symbol = match (chars.next(), chars.next()) {
        (Some(symbol), None) => symbol,
        _ => return Err(LoadError::InvalidOperator(token.to_string())),
    };
    let left = cursor.load_expression()?;
    let right = cursor.load_expression()?;
    Ok(Expression::op(symbol, left, right))
}
