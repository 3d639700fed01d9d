use log::{debug, info};
use rayon::prelude::*;

use crate::bindings::Bindings;
use crate::config::EngineConfig;
use crate::engine::errors::EngineError;
use crate::expression::Expression;
use crate::parser::parse_with_config;
use crate::serialization::LoaderRegistry;
use crate::utils::{ArithmeticSyntax, SyntaxOracle};
use crate::visitor::{ComputeVisitor, Diagnostic, PrettyPrintVisitor};

/// Outcome of running both visitors over one tree
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub result: f64,
    pub pretty_print: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl Evaluation {
    /// True when evaluation needed no fallback values
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Checks, parses and evaluates expression strings
pub struct ExpressionEngine {
    config: EngineConfig,
    oracle: Box<dyn SyntaxOracle>,
}

impl ExpressionEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            oracle: Box::new(ArithmeticSyntax),
        }
    }

    /// Replace the syntax check run before parsing
    pub fn with_oracle(mut self, oracle: impl SyntaxOracle + 'static) -> Self {
        self.oracle = Box::new(oracle);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if the syntax check rejects the
    /// input, or [`EngineError::Parse`] if parsing fails.
    pub fn parse(&self, input: &str) -> Result<Expression, EngineError> {
        self.oracle.check(input)?;
        Ok(parse_with_config(input, &self.config)?)
    }

    /// # Errors
    ///
    /// See [`ExpressionEngine::parse`].
    pub fn evaluate(&self, input: &str, bindings: &Bindings) -> Result<Evaluation, EngineError> {
        self.evaluate_with_tree(input, bindings).map(|(_, evaluation)| evaluation)
    }

    /// Like [`ExpressionEngine::evaluate`], also handing back the parsed tree.
    ///
    /// # Errors
    ///
    /// See [`ExpressionEngine::parse`].
    pub fn evaluate_with_tree(
        &self,
        input: &str,
        bindings: &Bindings,
    ) -> Result<(Expression, Evaluation), EngineError> {
        let expr = self.parse(input)?;
        let evaluation = self.evaluate_tree(&expr, bindings);
        Ok((expr, evaluation))
    }

    /// # Errors
    ///
    /// Returns [`EngineError::Load`] if the stream cannot be loaded with the
    /// global registry.
    pub fn evaluate_serialized(
        &self,
        text: &str,
        bindings: &Bindings,
    ) -> Result<Evaluation, EngineError> {
        let expr = LoaderRegistry::global().load_str(text, &self.config)?;
        Ok(self.evaluate_tree(&expr, bindings))
    }

    pub fn evaluate_tree(&self, expr: &Expression, bindings: &Bindings) -> Evaluation {
        let mut compute = ComputeVisitor::with_config(bindings, &self.config);
        expr.accept(&mut compute);
        let (result, diagnostics) = compute.into_parts();

        let mut printer = PrettyPrintVisitor::with_config(&self.config);
        expr.accept(&mut printer);
        let pretty_print = printer.into_output();

        debug!(
            "Evaluated {} to {} with {} diagnostic(s)",
            pretty_print,
            result,
            diagnostics.len()
        );
        Evaluation {
            result,
            pretty_print,
            diagnostics,
        }
    }

    /// Evaluates every input in parallel; results keep the input order.
    pub fn evaluate_batch<S: AsRef<str> + Sync>(
        &self,
        inputs: &[S],
        bindings: &Bindings,
    ) -> Vec<Result<Evaluation, EngineError>> {
        info!("Evaluating batch of {} expressions", inputs.len());
        inputs
            .par_iter()
            .map(|input| self.evaluate(input.as_ref(), bindings))
            .collect()
    }

    /// Parallel [`ExpressionEngine::evaluate_with_tree`]; results keep the
    /// input order.
    pub fn evaluate_batch_with_trees<S: AsRef<str> + Sync>(
        &self,
        inputs: &[S],
        bindings: &Bindings,
    ) -> Vec<Result<(Expression, Evaluation), EngineError>> {
        info!("Evaluating batch of {} expressions", inputs.len());
        inputs
            .par_iter()
            .map(|input| self.evaluate_with_tree(input.as_ref(), bindings))
            .collect()
    }
}

impl Default for ExpressionEngine {
    fn default() -> Self {
        Self::new()
    }
}
