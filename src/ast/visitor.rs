use crate::ast::{BinaryOperator, Block, Expr, PostfixOperator, PrefixOperator};

/// A traversal over single expressions.
///
/// [`Expr::accept`] picks the method matching the node's variant; the
/// implementation decides what happens and whether to recurse into the
/// children it is handed.
///
/// ## Example
/// ```
/// use bantam::ast::{BinaryOperator, Expr, PostfixOperator, PrefixOperator, Visitor};
///
/// #[derive(Default)]
/// struct NameCounter(usize);
///
/// impl Visitor for NameCounter {
///     fn visit_name(&mut self, _: &str) {
///         self.0 += 1;
///     }
///
///     fn visit_number(&mut self, _: f64) {}
///
///     fn visit_assign(&mut self, _: &str, value: &Expr) {
///         value.accept(self);
///     }
///
///     fn visit_conditional(&mut self, condition: &Expr, then_branch: &Expr, else_branch: &Expr) {
///         condition.accept(self);
///         then_branch.accept(self);
///         else_branch.accept(self);
///     }
///
///     fn visit_call(&mut self, callee: &Expr, arguments: &[Expr]) {
///         callee.accept(self);
///         arguments.iter().for_each(|argument| argument.accept(self));
///     }
///
///     fn visit_prefix(&mut self, _: PrefixOperator, operand: &Expr) {
///         operand.accept(self);
///     }
///
///     fn visit_postfix(&mut self, operand: &Expr, _: PostfixOperator) {
///         operand.accept(self);
///     }
///
///     fn visit_infix(&mut self, left: &Expr, _: BinaryOperator, right: &Expr) {
///         left.accept(self);
///         right.accept(self);
///     }
/// }
///
/// let expr = bantam::parse(bantam::tokenize("f(a, b) + c")).unwrap();
/// let mut counter = NameCounter::default();
/// expr.accept(&mut counter);
/// assert_eq!(counter.0, 4);
/// ```
pub trait Visitor {
    /// Visits a name reference.
    fn visit_name(&mut self, name: &str);
    /// Visits a number literal.
    fn visit_number(&mut self, value: f64);
    /// Visits an assignment.
    fn visit_assign(&mut self, name: &str, value: &Expr);
    /// Visits a conditional expression.
    fn visit_conditional(&mut self, condition: &Expr, then_branch: &Expr, else_branch: &Expr);
    /// Visits a call.
    fn visit_call(&mut self, callee: &Expr, arguments: &[Expr]);
    /// Visits a prefix operation.
    fn visit_prefix(&mut self, op: PrefixOperator, operand: &Expr);
    /// Visits a postfix operation.
    fn visit_postfix(&mut self, operand: &Expr, op: PostfixOperator);
    /// Visits a binary operation.
    fn visit_infix(&mut self, left: &Expr, op: BinaryOperator, right: &Expr);
}

/// A traversal that can also handle the top-level [`Block`].
pub trait BlockVisitor: Visitor {
    /// Visits the expressions of a block.
    fn visit_block(&mut self, expressions: &[Expr]);
}

/// Anything a [`BlockVisitor`] can be applied to: a single expression or a
/// whole block.
pub trait Visitable {
    /// Applies the visitor to `self`.
    fn visit<V: BlockVisitor + ?Sized>(&self, visitor: &mut V);
}

impl Visitable for Expr {
    fn visit<V: BlockVisitor + ?Sized>(&self, visitor: &mut V) {
        self.accept(visitor);
    }
}

impl Visitable for Block {
    fn visit<V: BlockVisitor + ?Sized>(&self, visitor: &mut V) {
        self.accept(visitor);
    }
}
