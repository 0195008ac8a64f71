/// The fully parenthesized printer.
///
/// Re-renders the AST with explicit parentheses around every operator
/// application, which makes precedence and associativity visible.
pub mod pretty;
/// The S-expression printer.
///
/// Renders every node in a uniform `(op child child)` form.
pub mod sexpr;
/// The tree printer.
///
/// Renders one indented line per node.
pub mod tree;
