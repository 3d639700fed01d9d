use crate::config::EngineConfig;
use crate::expression::Expression;
use crate::parser::{ParseError, parse, parse_with_config};

fn c(value: f64) -> Expression {
    Expression::constant(value)
}

#[test]
fn test_single_constant() {
    let result = parse("42");
    assert_eq!(result, Ok(c(42.0)));
}

#[test]
fn test_same_precedence_chain_is_left_associative() {
    let result = parse("3-5+6");
    let expected = Expression::op('+', Expression::op('-', c(3.0), c(5.0)), c(6.0));
    assert_eq!(result, Ok(expected));
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let result = parse("1+2*3");
    let expected = Expression::op('+', c(1.0), Expression::op('*', c(2.0), c(3.0)));
    assert_eq!(result, Ok(expected));
}

#[test]
fn test_power_binds_tightest() {
    let result = parse("2*3^2");
    let expected = Expression::op('*', c(2.0), Expression::op('^', c(3.0), c(2.0)));
    assert_eq!(result, Ok(expected));
}

#[test]
fn test_power_chain_splits_at_rightmost() {
    let result = parse("2^3^2");
    let expected = Expression::op('^', Expression::op('^', c(2.0), c(3.0)), c(2.0));
    assert_eq!(result, Ok(expected));
}

#[test]
fn test_mixed_precedence_shape() {
    let result = parse("11-8/4*3+2");
    let expected = Expression::op(
        '+',
        Expression::op(
            '-',
            c(11.0),
            Expression::op('*', Expression::op('/', c(8.0), c(4.0)), c(3.0)),
        ),
        c(2.0),
    );
    assert_eq!(result, Ok(expected));
}

#[test]
fn test_empty_leaf_is_a_parse_error() {
    assert_eq!(parse("*3"), Err(ParseError::InvalidNumber(String::new())));
    assert_eq!(parse("3+"), Err(ParseError::InvalidNumber(String::new())));
    assert_eq!(parse(""), Err(ParseError::InvalidNumber(String::new())));
}

#[test]
fn test_non_integer_leaf_is_a_parse_error() {
    assert_eq!(parse("2.5"), Err(ParseError::InvalidNumber("2.5".to_string())));
    assert_eq!(parse("1+x"), Err(ParseError::InvalidNumber("x".to_string())));
}

#[test]
fn test_integer_overflow_is_a_parse_error() {
    let result = parse("99999999999999999999");
    assert!(matches!(result, Err(ParseError::InvalidNumber(_))));
}

#[test]
fn test_depth_limit() {
    let config = EngineConfig::with_max_depth(3);
    assert!(parse_with_config("1+2+3", &config).is_ok());
    assert_eq!(
        parse_with_config("1+2+3+4", &config),
        Err(ParseError::DepthExceeded { limit: 3 })
    );
}

#[test]
fn test_long_chain_reports_depth_instead_of_overflowing() {
    let input = vec!["1"; 10_000].join("+");
    let result = parse(&input);
    assert!(matches!(result, Err(ParseError::DepthExceeded { .. })));
}
