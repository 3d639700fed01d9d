use std::fmt;

use crate::expression::ast::Expression;
use crate::visitor::PrettyPrintVisitor;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut printer = PrettyPrintVisitor::new();
        self.accept(&mut printer);
        write!(f, "{}", printer.output())
    }
}
