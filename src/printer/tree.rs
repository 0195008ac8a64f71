use crate::ast::{BinaryOperator, BlockVisitor, Expr, PostfixOperator, PrefixOperator, Visitor};

/// Width of one indentation level.
const INDENT: &str = "  ";

/// Renders the AST as an indented tree, one line per node.
///
/// ## Example
/// ```
/// let expr = bantam::parse(bantam::tokenize("-a * 2")).unwrap();
/// assert_eq!(bantam::to_tree(&expr),
///            "infix '*'\n  prefix '-'\n    name 'a'\n  number 2\n");
/// ```
#[derive(Debug, Default)]
pub struct TreePrinter {
    output: String,
    indent: usize,
}

impl TreePrinter {
    /// Creates a printer with an empty buffer at depth zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { output: String::new(),
               indent: 0, }
    }

    /// Consumes the printer and returns the rendered text.
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.output.push_str(INDENT);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn nested(&mut self, children: &[&Expr]) {
        self.indent += 1;
        for child in children {
            child.accept(self);
        }
        self.indent -= 1;
    }
}

impl Visitor for TreePrinter {
    fn visit_name(&mut self, name: &str) {
        self.line(&format!("name '{name}'"));
    }

    fn visit_number(&mut self, value: f64) {
        self.line(&format!("number {value}"));
    }

    fn visit_assign(&mut self, name: &str, value: &Expr) {
        self.line("assign");
        self.indent += 1;
        self.line(&format!("name '{name}'"));
        value.accept(self);
        self.indent -= 1;
    }

    fn visit_conditional(&mut self, condition: &Expr, then_branch: &Expr, else_branch: &Expr) {
        self.line("if");
        self.nested(&[condition, then_branch, else_branch]);
    }

    fn visit_call(&mut self, callee: &Expr, arguments: &[Expr]) {
        self.line("call");
        let children: Vec<&Expr> = std::iter::once(callee).chain(arguments).collect();
        self.nested(&children);
    }

    fn visit_prefix(&mut self, op: PrefixOperator, operand: &Expr) {
        self.line(&format!("prefix '{op}'"));
        self.nested(&[operand]);
    }

    fn visit_postfix(&mut self, operand: &Expr, op: PostfixOperator) {
        self.line(&format!("postfix '{op}'"));
        self.nested(&[operand]);
    }

    fn visit_infix(&mut self, left: &Expr, op: BinaryOperator, right: &Expr) {
        self.line(&format!("infix '{op}'"));
        self.nested(&[left, right]);
    }
}

impl BlockVisitor for TreePrinter {
    fn visit_block(&mut self, expressions: &[Expr]) {
        self.line("block");
        let children: Vec<&Expr> = expressions.iter().collect();
        self.nested(&children);
    }
}

impl std::fmt::Display for TreePrinter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.output)
    }
}
