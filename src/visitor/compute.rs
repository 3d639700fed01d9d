use log::{debug, warn};

use crate::bindings::Bindings;
use crate::config::EngineConfig;
use crate::expression::{Constant, Expression, Op, Parentheses, Variable};
use crate::visitor::diagnostics::Diagnostic;
use crate::visitor::{DepthGuard, Visitor};

/// Division rounded toward negative infinity.
///
/// Works from the exact remainder so the floor is taken of the true quotient,
/// not of the rounded `left / right` (`1 / 0.1` is 9, not 10).
fn floor_div(left: f64, right: f64) -> f64 {
    let remainder = left % right;
    let mut quotient = (left - remainder) / right;
    if remainder != 0.0 && (remainder < 0.0) != (right < 0.0) {
        quotient -= 1.0;
    }

    if quotient == 0.0 {
        return 0.0_f64.copysign(left / right);
    }
    let floored = quotient.floor();
    if quotient - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

fn apply(symbol: char, left: f64, right: f64) -> Option<f64> {
    match symbol {
        '^' => Some(left.powf(right)),
        '+' => Some(left + right),
        '-' => Some(left - right),
        '*' => Some(left * right),
        '/' => Some(floor_div(left, right)),
        _ => None,
    }
}

/// Computes the numeric value of a tree.
///
/// The result lives in a single accumulator: each visit leaves its node's
/// value there, so an `Op` reads its left result before visiting the right.
pub struct ComputeVisitor<'a> {
    result: f64,
    bindings: &'a Bindings,
    diagnostics: Vec<Diagnostic>,
    guard: DepthGuard,
}

impl<'a> ComputeVisitor<'a> {
    pub fn new(bindings: &'a Bindings) -> Self {
        Self::with_config(bindings, &EngineConfig::default())
    }

    pub fn with_config(bindings: &'a Bindings, config: &EngineConfig) -> Self {
        Self {
            result: 0.0,
            bindings,
            diagnostics: Vec::new(),
            guard: DepthGuard::new(config.max_depth),
        }
    }

    /// Value left by the most recent visit
    pub fn result(&self) -> f64 {
        self.result
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (f64, Vec<Diagnostic>) {
        (self.result, self.diagnostics)
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    fn descend(&mut self, child: &Expression) -> bool {
        if !self.guard.enter() {
            let limit = self.guard.limit();
            self.report(Diagnostic::DepthExceeded { limit });
            return false;
        }
        child.accept(self);
        self.guard.leave();
        true
    }
}

impl Visitor for ComputeVisitor<'_> {
    fn visit_constant(&mut self, constant: &Constant) {
        self.result = constant.value;
    }

    fn visit_op(&mut self, op: &Op) {
        if !self.descend(&op.left) {
            return;
        }
        let left = self.result;

        if !self.descend(&op.right) {
            return;
        }
        let right = self.result;

        if op.symbol == '/' && right == 0.0 {
            self.report(Diagnostic::DivisionByZero);
            return;
        }

        match apply(op.symbol, left, right) {
            Some(value) => {
                debug!("{} {} {} = {}", left, op.symbol, right, value);
                self.result = value;
            }
            None => self.report(Diagnostic::UnknownOperator(op.symbol)),
        }
    }

    fn visit_variable(&mut self, variable: &Variable) {
        match self.bindings.get(&variable.name) {
            Some(value) => self.result = value,
            None => {
                self.report(Diagnostic::UndefinedVariable(variable.name.clone()));
                self.result = 0.0;
            }
        }
    }

    fn visit_parentheses(&mut self, parentheses: &Parentheses) {
        self.descend(&parentheses.inner);
    }
}
