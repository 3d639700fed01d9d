//! Double-dispatch operations over the expression tree
//!
//! A new operation is a new [`Visitor`] implementation; the node types never
//! change for it. Adding a node kind means adding a required method here, so
//! every existing visitor stops compiling until it handles the new kind.

mod compute;
mod diagnostics;
mod pretty;
mod save;

pub use compute::ComputeVisitor;
pub use diagnostics::Diagnostic;
pub use pretty::PrettyPrintVisitor;
pub use save::SaveVisitor;

use crate::expression::{Constant, Op, Parentheses, Variable};

/// One method per node kind; [`crate::Expression::accept`] routes each node
/// to exactly one of them.
pub trait Visitor {
    fn visit_constant(&mut self, constant: &Constant);
    fn visit_op(&mut self, op: &Op);
    fn visit_variable(&mut self, variable: &Variable);
    fn visit_parentheses(&mut self, parentheses: &Parentheses);
}

/// Tracks how many levels a visitor is below the root
#[derive(Debug, Clone, Copy)]
pub(crate) struct DepthGuard {
    current: usize,
    limit: usize,
}

impl DepthGuard {
    pub(crate) fn new(limit: usize) -> Self {
        Self { current: 1, limit }
    }

    pub(crate) fn limit(&self) -> usize {
        self.limit
    }

    /// Returns false when one more level would pass the limit.
    pub(crate) fn enter(&mut self) -> bool {
        if self.current >= self.limit {
            return false;
        }
        self.current += 1;
        true
    }

    pub(crate) fn leave(&mut self) {
        self.current = self.current.saturating_sub(1).max(1);
    }
}
