use crate::ast::{BinaryOperator, BlockVisitor, Expr, PostfixOperator, PrefixOperator, Visitor};

/// Renders the AST as S-expressions.
///
/// | node        | rendering             |
/// |-------------|-----------------------|
/// | name        | `(read a)`            |
/// | number      | `(number 1)`          |
/// | assignment  | `(write a value)`     |
/// | conditional | `(if c t e)`          |
/// | call        | `(call f a b)`        |
/// | prefix      | `(prefix - a)`        |
/// | postfix     | `(postfix ! a)`       |
/// | binary      | `(+ a b)`             |
/// | block       | `(block e1 e2)`       |
///
/// ## Example
/// ```
/// let expr = bantam::parse(bantam::tokenize("x = -y + 2")).unwrap();
/// assert_eq!(bantam::to_sexpr(&expr),
///            "(write x (+ (prefix - (read y)) (number 2)))");
/// ```
#[derive(Debug, Default)]
pub struct SExprPrinter {
    output: String,
}

impl SExprPrinter {
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

    fn open(&mut self, head: &str) {
        self.output.push('(');
        self.output.push_str(head);
    }

    fn child(&mut self, expr: &Expr) {
        self.output.push(' ');
        expr.accept(self);
    }

    fn close(&mut self) {
        self.output.push(')');
    }
}

impl Visitor for SExprPrinter {
    fn visit_name(&mut self, name: &str) {
        self.open("read ");
        self.output.push_str(name);
        self.close();
    }

    fn visit_number(&mut self, value: f64) {
        self.open("number ");
        self.output.push_str(&value.to_string());
        self.close();
    }

    fn visit_assign(&mut self, name: &str, value: &Expr) {
        self.open("write ");
        self.output.push_str(name);
        self.child(value);
        self.close();
    }

    fn visit_conditional(&mut self, condition: &Expr, then_branch: &Expr, else_branch: &Expr) {
        self.open("if");
        self.child(condition);
        self.child(then_branch);
        self.child(else_branch);
        self.close();
    }

    fn visit_call(&mut self, callee: &Expr, arguments: &[Expr]) {
        self.open("call");
        self.child(callee);
        for argument in arguments {
            self.child(argument);
        }
        self.close();
    }

    fn visit_prefix(&mut self, op: PrefixOperator, operand: &Expr) {
        self.open("prefix ");
        self.output.push_str(&op.to_string());
        self.child(operand);
        self.close();
    }

    fn visit_postfix(&mut self, operand: &Expr, op: PostfixOperator) {
        self.open("postfix ");
        self.output.push_str(&op.to_string());
        self.child(operand);
        self.close();
    }

    fn visit_infix(&mut self, left: &Expr, op: BinaryOperator, right: &Expr) {
        self.open(&op.to_string());
        self.child(left);
        self.child(right);
        self.close();
    }
}

impl BlockVisitor for SExprPrinter {
    fn visit_block(&mut self, expressions: &[Expr]) {
        self.open("block");
        for expr in expressions {
            self.child(expr);
        }
        self.close();
    }
}

impl std::fmt::Display for SExprPrinter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.output)
    }
}
