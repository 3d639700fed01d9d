use crate::bindings::Bindings;
use crate::config::EngineConfig;
use crate::engine::{EngineError, ExpressionEngine};
use crate::parser::ParseError;
use crate::serialization::LoadError;
use crate::utils::{SyntaxOracle, ValidationError};
use crate::visitor::Diagnostic;

#[test]
fn test_evaluate_returns_result_and_pretty_print() {
    let engine = ExpressionEngine::new();
    let result = engine.evaluate("16/4+4*3-3+1", &Bindings::new());
    assert!(result.is_ok());
    if let Ok(evaluation) = result {
        assert_eq!(evaluation.result, 14.0);
        assert_eq!(
            evaluation.pretty_print,
            "(((((16)/(4))+((4)*(3)))-(3))+(1))"
        );
        assert!(evaluation.is_clean());
    }
}

#[test]
fn test_empty_input_is_invalid() {
    let engine = ExpressionEngine::new();
    let result = engine.evaluate("", &Bindings::new());
    assert_eq!(result, Err(EngineError::InvalidInput(ValidationError::Empty)));
    if let Err(e) = result {
        assert_eq!(e.to_string(), "Invalid Input");
    }
}

#[test]
fn test_rejected_input_is_never_parsed() {
    let engine = ExpressionEngine::new();
    for input in ["   ", "*3", "3+", "1+a", "3 + 4"] {
        let result = engine.evaluate(input, &Bindings::new());
        assert!(
            matches!(result, Err(EngineError::InvalidInput(_))),
            "expected invalid input for '{}', got {:?}",
            input,
            result
        );
    }
}

struct AcceptEverything;

impl SyntaxOracle for AcceptEverything {
    fn check(&self, _input: &str) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[test]
fn test_parse_failure_surfaces_when_oracle_lets_input_through() {
    let engine = ExpressionEngine::new().with_oracle(AcceptEverything);
    let result = engine.evaluate("*3", &Bindings::new());
    assert_eq!(
        result,
        Err(EngineError::Parse(ParseError::InvalidNumber(String::new())))
    );
}

#[test]
fn test_depth_limit_from_config() {
    let engine = ExpressionEngine::with_config(EngineConfig::with_max_depth(2));
    assert_eq!(engine.config().max_depth, 2);
    assert!(engine.evaluate("1+2", &Bindings::new()).is_ok());
    assert_eq!(
        engine.evaluate("1+2+3", &Bindings::new()),
        Err(EngineError::Parse(ParseError::DepthExceeded { limit: 2 }))
    );
}

#[test]
fn test_evaluate_serialized_with_variables() {
    let engine = ExpressionEngine::new();
    let bindings = Bindings::new().with("x", 6.0);
    let result = engine.evaluate_serialized("Op / Variable x Parentheses Constant 4", &bindings);
    assert!(result.is_ok());
    if let Ok(evaluation) = result {
        assert_eq!(evaluation.result, 1.0);
        assert_eq!(evaluation.pretty_print, "(x/(4))");
    }
}

#[test]
fn test_evaluate_serialized_reports_diagnostics() {
    let engine = ExpressionEngine::new();
    let result = engine.evaluate_serialized("Op + Variable y Constant 2", &Bindings::new());
    assert!(result.is_ok());
    if let Ok(evaluation) = result {
        assert_eq!(evaluation.result, 2.0);
        assert!(!evaluation.is_clean());
        assert_eq!(
            evaluation.diagnostics,
            vec![Diagnostic::UndefinedVariable("y".to_string())]
        );
    }
}

#[test]
fn test_evaluate_serialized_unknown_tag() {
    let engine = ExpressionEngine::new();
    let result = engine.evaluate_serialized("Sqrt Constant 4", &Bindings::new());
    assert_eq!(
        result,
        Err(EngineError::Load(LoadError::UnregisteredTag("Sqrt".to_string())))
    );
}

#[test]
fn test_evaluate_batch_keeps_order() {
    let engine = ExpressionEngine::new();
    let inputs = vec!["3+4", "", "8*3/4", "11-8/4*3+2", "3-5+6-2+9"];
    let results = engine.evaluate_batch(&inputs, &Bindings::new());
    assert_eq!(results.len(), inputs.len());

    let values: Vec<Option<f64>> = results
        .iter()
        .map(|r| r.as_ref().ok().map(|e| e.result))
        .collect();
    assert_eq!(
        values,
        vec![Some(7.0), None, Some(6.0), Some(7.0), Some(11.0)]
    );
}

#[test]
fn test_evaluate_with_tree_returns_the_evaluated_tree() {
    let engine = ExpressionEngine::new();
    let result = engine.evaluate_with_tree("8*3/4", &Bindings::new());
    assert!(result.is_ok());
    if let Ok((tree, evaluation)) = result {
        assert_eq!(engine.parse("8*3/4"), Ok(tree.clone()));
        assert_eq!(evaluation, engine.evaluate_tree(&tree, &Bindings::new()));
        assert_eq!(evaluation.result, 6.0);
    }
}

#[test]
fn test_evaluate_batch_with_trees_keeps_order() {
    let engine = ExpressionEngine::new();
    let inputs = vec!["3+4", "1++2", "9/2"];
    let results = engine.evaluate_batch_with_trees(&inputs, &Bindings::new());
    assert_eq!(results.len(), inputs.len());

    let pretty: Vec<Option<String>> = results
        .iter()
        .map(|r| r.as_ref().ok().map(|(tree, _)| tree.to_string()))
        .collect();
    assert_eq!(
        pretty,
        vec![Some("((3)+(4))".to_string()), None, Some("((9)/(2))".to_string())]
    );
}
