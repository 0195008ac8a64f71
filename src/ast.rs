/// Visitor traits used to traverse the AST.
pub mod visitor;

pub use visitor::{BlockVisitor, Visitable, Visitor};

/// An abstract syntax tree (AST) node representing a single expression.
///
/// Each node owns its children exclusively. Nodes are created once by a
/// parselet and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a name.
    Name {
        /// The identifier.
        name: String,
    },
    /// A number literal.
    Number {
        /// The literal text as written in the source.
        text:  String,
        /// The parsed value.
        value: f64,
    },
    /// Assignment of a value to a name (`a = b`).
    Assign {
        /// The name being assigned.
        name:  String,
        /// The assigned expression.
        value: Box<Self>,
    },
    /// Conditional expression (`c ? t : e`).
    Conditional {
        /// The condition.
        condition:   Box<Self>,
        /// Evaluated when the condition is non-zero.
        then_branch: Box<Self>,
        /// Evaluated when the condition is zero.
        else_branch: Box<Self>,
    },
    /// Call expression (`f(a, b)`).
    Call {
        /// The expression producing the callee.
        callee:    Box<Self>,
        /// Arguments, in source order.
        arguments: Vec<Self>,
    },
    /// A prefix operation (`-a`).
    Prefix {
        /// The operator.
        op:      PrefixOperator,
        /// The operand.
        operand: Box<Self>,
    },
    /// A postfix operation (`a!`).
    Postfix {
        /// The operand.
        operand: Box<Self>,
        /// The operator.
        op:      PostfixOperator,
    },
    /// A binary operation (`a + b`).
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Creates a name expression.
    ///
    /// ## Example
    /// ```
    /// use bantam::ast::Expr;
    ///
    /// let expr = Expr::name("x");
    /// assert_eq!(expr, Expr::Name { name: "x".to_string() });
    /// ```
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name { name: name.into() }
    }

    /// Creates a number expression whose text is the value's shortest
    /// rendering.
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number { text: value.to_string(),
                       value }
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn infix(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::Infix { left: Box::new(left),
                      op,
                      right: Box::new(right) }
    }

    /// Dispatches to the visitor method matching this variant.
    ///
    /// Children are passed unevaluated; the visitor decides whether and when
    /// to recurse into them.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Self::Name { name } => visitor.visit_name(name),
            Self::Number { value, .. } => visitor.visit_number(*value),
            Self::Assign { name, value } => visitor.visit_assign(name, value),
            Self::Conditional { condition,
                                then_branch,
                                else_branch, } => {
                visitor.visit_conditional(condition, then_branch, else_branch);
            },
            Self::Call { callee, arguments } => visitor.visit_call(callee, arguments),
            Self::Prefix { op, operand } => visitor.visit_prefix(*op, operand),
            Self::Postfix { operand, op } => visitor.visit_postfix(operand, *op),
            Self::Infix { left, op, right } => visitor.visit_infix(left, *op, right),
        }
    }
}

/// The top-level sequence of expressions.
///
/// Only whole programs are wrapped in a block; visiting one requires a
/// [`BlockVisitor`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    /// The expressions, in source order.
    pub expressions: Vec<Expr>,
}

impl Block {
    /// Creates a block from a list of expressions.
    #[must_use]
    pub const fn new(expressions: Vec<Expr>) -> Self {
        Self { expressions }
    }

    /// Dispatches to [`BlockVisitor::visit_block`].
    pub fn accept<V: BlockVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_block(&self.expressions);
    }
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PrefixOperator {
    /// Identity (`+a`)
    Plus,
    /// Arithmetic negation (`-a`)
    Minus,
    /// Bitwise complement (`~a`)
    Tilde,
    /// Logical NOT (`!a`)
    Bang,
}

/// Represents a postfix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PostfixOperator {
    /// Factorial (`a!`)
    Bang,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl std::fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Tilde => "~",
            Self::Bang => "!",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for PostfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bang => write!(f, "!"),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
        };
        write!(f, "{operator}")
    }
}
