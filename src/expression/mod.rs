//! Expression tree node types

mod ast;
mod display;

pub use ast::{Constant, Expression, Op, Parentheses, Variable};
