use crate::config::EngineConfig;
use crate::expression::{Constant, Expression, Op, Parentheses, Variable};
use crate::serialization::SaveError;
use crate::visitor::{DepthGuard, Visitor};

/// Writes a tree as the tagged token stream read back by the loaders.
///
/// Tokens are separated by single spaces, parents before children. The first
/// problem stops output and is kept for [`SaveVisitor::finish`].
pub struct SaveVisitor {
    tokens: Vec<String>,
    guard: DepthGuard,
    error: Option<SaveError>,
}

impl SaveVisitor {
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            tokens: Vec::new(),
            guard: DepthGuard::new(config.max_depth),
            error: None,
        }
    }

    /// # Errors
    ///
    /// Returns the first node that could not be written.
    pub fn finish(self) -> Result<String, SaveError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.tokens.join(" ")),
        }
    }

    fn push(&mut self, tag: &str) -> bool {
        if self.error.is_some() {
            return false;
        }
        self.tokens.push(tag.to_string());
        true
    }

    fn descend(&mut self, child: &Expression) {
        if self.error.is_some() {
            return;
        }
        if !self.guard.enter() {
            self.error = Some(SaveError::DepthExceeded {
                limit: self.guard.limit(),
            });
            return;
        }
        child.accept(self);
        self.guard.leave();
    }
}

impl Default for SaveVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for SaveVisitor {
    fn visit_constant(&mut self, constant: &Constant) {
        if self.push("Constant") {
            self.tokens.push(constant.value.to_string());
        }
    }

    fn visit_op(&mut self, op: &Op) {
        if self.error.is_none() && op.symbol.is_whitespace() {
            self.error = Some(SaveError::UnsavableOperator(op.symbol));
            return;
        }
        if self.push("Op") {
            self.tokens.push(op.symbol.to_string());
            self.descend(&op.left);
            self.descend(&op.right);
        }
    }

    fn visit_variable(&mut self, variable: &Variable) {
        let name = &variable.name;
        if self.error.is_none() && (name.is_empty() || name.chars().any(char::is_whitespace)) {
            self.error = Some(SaveError::UnsavableName(name.clone()));
            return;
        }
        if self.push("Variable") {
            self.tokens.push(name.clone());
        }
    }

    fn visit_parentheses(&mut self, parentheses: &Parentheses) {
        if self.push("Parentheses") {
            self.descend(&parentheses.inner);
        }
    }
}
