use crate::config::EngineConfig;
use crate::expression::{Constant, Expression, Op, Parentheses, Variable};
use crate::visitor::{DepthGuard, Visitor};

/// Placeholder written in place of subtrees past the depth limit
pub const ELIDED: &str = "(...)";

/// Renders a tree fully parenthesized: every constant and every operator
/// application gets its own pair, so grouping nodes add nothing.
pub struct PrettyPrintVisitor {
    output: String,
    guard: DepthGuard,
    truncated: bool,
}

impl PrettyPrintVisitor {
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            output: String::new(),
            guard: DepthGuard::new(config.max_depth),
            truncated: false,
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    /// True when some subtree was replaced by [`ELIDED`]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    fn render(&mut self, child: &Expression) -> String {
        if self.guard.enter() {
            child.accept(self);
            self.guard.leave();
        } else {
            self.truncated = true;
            self.output = ELIDED.to_string();
        }
        std::mem::take(&mut self.output)
    }
}

impl Default for PrettyPrintVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for PrettyPrintVisitor {
    fn visit_constant(&mut self, constant: &Constant) {
        self.output = format!("({})", constant.value);
    }

    fn visit_op(&mut self, op: &Op) {
        let left = self.render(&op.left);
        let right = self.render(&op.right);
        self.output = format!("({}{}{})", left, op.symbol, right);
    }

    fn visit_variable(&mut self, variable: &Variable) {
        self.output = variable.name.clone();
    }

    fn visit_parentheses(&mut self, parentheses: &Parentheses) {
        let inner = self.render(&parentheses.inner);
        self.output = inner;
    }
}
