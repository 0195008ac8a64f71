use crate::ast::{BinaryOperator, BlockVisitor, Expr, PostfixOperator, PrefixOperator, Visitor};

/// Renders the AST fully parenthesized.
///
/// Every prefix, postfix, binary, conditional and assignment form gets its
/// own parentheses; calls and block statements do not. Re-parsing the output
/// yields a tree that prints identically.
///
/// ## Example
/// ```
/// use bantam::printer::pretty::Printer;
///
/// let expr = bantam::parse(bantam::tokenize("a = b + c * d ^ e - f / g")).unwrap();
///
/// let mut printer = Printer::new();
/// expr.accept(&mut printer);
/// assert_eq!(printer.finish(), "(a = ((b + (c * (d ^ e))) - (f / g)))");
/// ```
#[derive(Debug, Default)]
pub struct Printer {
    output: String,
}

impl Printer {
    /// Creates a printer with an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self { output: String::new() }
    }

    /// Consumes the printer and returns the rendered text.
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }
}

impl Visitor for Printer {
    fn visit_name(&mut self, name: &str) {
        self.output.push_str(name);
    }

    fn visit_number(&mut self, value: f64) {
        self.output.push_str(&value.to_string());
    }

    fn visit_assign(&mut self, name: &str, value: &Expr) {
        self.output.push('(');
        self.output.push_str(name);
        self.output.push_str(" = ");
        value.accept(self);
        self.output.push(')');
    }

    fn visit_conditional(&mut self, condition: &Expr, then_branch: &Expr, else_branch: &Expr) {
        self.output.push('(');
        condition.accept(self);
        self.output.push_str(" ? ");
        then_branch.accept(self);
        self.output.push_str(" : ");
        else_branch.accept(self);
        self.output.push(')');
    }

    fn visit_call(&mut self, callee: &Expr, arguments: &[Expr]) {
        callee.accept(self);
        self.output.push('(');
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            argument.accept(self);
        }
        self.output.push(')');
    }

    fn visit_prefix(&mut self, op: PrefixOperator, operand: &Expr) {
        self.output.push('(');
        self.output.push_str(&op.to_string());
        operand.accept(self);
        self.output.push(')');
    }

    fn visit_postfix(&mut self, operand: &Expr, op: PostfixOperator) {
        self.output.push('(');
        operand.accept(self);
        self.output.push_str(&op.to_string());
        self.output.push(')');
    }

    fn visit_infix(&mut self, left: &Expr, op: BinaryOperator, right: &Expr) {
        self.output.push('(');
        left.accept(self);
        self.output.push(' ');
        self.output.push_str(&op.to_string());
        self.output.push(' ');
        right.accept(self);
        self.output.push(')');
    }
}

impl BlockVisitor for Printer {
    fn visit_block(&mut self, expressions: &[Expr]) {
        for (i, expr) in expressions.iter().enumerate() {
            if i > 0 {
                self.output.push_str("; ");
            }
            expr.accept(self);
        }
    }
}

impl std::fmt::Display for Printer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.output)
    }
}
