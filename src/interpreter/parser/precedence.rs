/// Precedence levels, from loosest to tightest binding.
///
/// The engine keeps folding infix/postfix parselets into the left operand
/// while the next token's precedence is greater than the floor it was
/// called with. `Unknown` is what tokens without an infix parselet report, so
/// a floor of `0` parses everything that can continue an expression.
///
/// ## Example
/// ```
/// use bantam::interpreter::parser::precedence::Precedence;
///
/// assert!(Precedence::Product > Precedence::Sum);
/// assert_eq!(Precedence::Exponent.level(), 5);
/// assert_eq!(Precedence::Exponent.below(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// No infix parselet.
    Unknown     = 0,
    /// `=`
    Assignment  = 1,
    /// `? :`
    Conditional = 2,
    /// `+ -`
    Sum         = 3,
    /// `* /`
    Product     = 4,
    /// `^`
    Exponent    = 5,
    /// Unary `+ - ~ !`
    Prefix      = 6,
    /// Postfix `!`
    Postfix     = 7,
    /// `(` after an expression.
    Call        = 8,
}

impl Precedence {
    /// The numeric level of this precedence.
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// The level just below this one.
    ///
    /// Recursing at this floor lets an operator of the same precedence fold
    /// into the right operand, which makes an operator right-associative.
    #[must_use]
    pub const fn below(self) -> u8 {
        self.level().saturating_sub(1)
    }
}

/// Associativity of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}
