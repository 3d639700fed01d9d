use crate::visitor::Visitor;

/// A numeric literal leaf
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub value: f64,
}

/// A named leaf whose value is looked up at evaluation time
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
}

/// Explicit grouping around exactly one child
#[derive(Debug, Clone, PartialEq)]
pub struct Parentheses {
    pub inner: Box<Expression>,
}

/// Binary operator node. The symbol is not checked here; evaluation reports
/// anything outside `+ - * / ^`.
#[derive(Debug, Clone, PartialEq)]
pub struct Op {
    pub symbol: char,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

/// Represents a node of an arithmetic expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Constant(Constant),
    Variable(Variable),
    Parentheses(Parentheses),
    Op(Op),
}

impl Expression {
    pub fn constant(value: f64) -> Self {
        Expression::Constant(Constant { value })
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(Variable { name: name.into() })
    }

    pub fn parentheses(inner: Expression) -> Self {
        Expression::Parentheses(Parentheses {
            inner: Box::new(inner),
        })
    }

    pub fn op(symbol: char, left: Expression, right: Expression) -> Self {
        Expression::Op(Op {
            symbol,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Dispatch to the visitor method matching this node's variant.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Expression::Constant(constant) => visitor.visit_constant(constant),
            Expression::Variable(variable) => visitor.visit_variable(variable),
            Expression::Parentheses(parentheses) => visitor.visit_parentheses(parentheses),
            Expression::Op(op) => visitor.visit_op(op),
        }
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        match self {
            Expression::Constant(_) | Expression::Variable(_) => 1,
            Expression::Parentheses(parentheses) => 1 + parentheses.inner.depth(),
            Expression::Op(op) => 1 + op.left.depth().max(op.right.depth()),
        }
    }

    /// Type tag used by the serialized form
    pub fn tag(&self) -> &'static str {
        match self {
            Expression::Constant(_) => "Constant",
            Expression::Variable(_) => "Variable",
            Expression::Parentheses(_) => "Parentheses",
            Expression::Op(_) => "Op",
        }
    }
}
