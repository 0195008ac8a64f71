use crate::{
    ast::Expr,
    error::{ParseError, ParseResult},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::Parser,
            parselet::InfixParselet,
            precedence::{Associativity, Precedence},
            utils::{parse_comma_separated, token_to_binary_operator, token_to_postfix_operator},
        },
    },
};

/// Parses a binary operator.
///
/// A left-associative operator parses its right operand at its own
/// precedence, so an operator of the same precedence ends the operand and
/// `a - b - c` is `(a - b) - c`. A right-associative one parses the right
/// operand one level lower, which lets the same operator fold into it:
/// `a ^ b ^ c` is `a ^ (b ^ c)`.
///
/// # Errors
/// [`ParseError::UnexpectedToken`] if registered for a token that is not a
/// binary operator.
#[derive(Debug, Clone, Copy)]
pub struct BinaryOperatorParselet {
    precedence:    Precedence,
    associativity: Associativity,
}

impl BinaryOperatorParselet {
    /// Creates a binary operator parselet.
    #[must_use]
    pub const fn new(precedence: Precedence, associativity: Associativity) -> Self {
        Self { precedence,
               associativity }
    }

    /// Creates a left-associative binary operator parselet.
    #[must_use]
    pub const fn left(precedence: Precedence) -> Self {
        Self::new(precedence, Associativity::Left)
    }
}

impl InfixParselet for BinaryOperatorParselet {
    fn parse(&self, parser: &mut Parser<'_>, left: Expr, token: Token) -> ParseResult<Expr> {
        let Some(op) = token_to_binary_operator(token.kind) else {
            return Err(ParseError::UnexpectedToken { token: token.text });
        };
        let floor = match self.associativity {
            Associativity::Left => self.precedence.level(),
            Associativity::Right => self.precedence.below(),
        };
        let right = parser.parse_expression(floor)?;
        Ok(Expr::infix(left, op, right))
    }

    fn precedence(&self) -> Precedence {
        self.precedence
    }
}

/// Parses a postfix operator such as factorial `!`.
#[derive(Debug, Clone, Copy)]
pub struct PostfixOperatorParselet {
    precedence: Precedence,
}

impl PostfixOperatorParselet {
    /// Creates a postfix operator parselet binding at `precedence`.
    #[must_use]
    pub const fn new(precedence: Precedence) -> Self {
        Self { precedence }
    }
}

impl InfixParselet for PostfixOperatorParselet {
    fn parse(&self, _parser: &mut Parser<'_>, left: Expr, token: Token) -> ParseResult<Expr> {
        let Some(op) = token_to_postfix_operator(token.kind) else {
            return Err(ParseError::UnexpectedToken { token: token.text });
        };
        Ok(Expr::Postfix { operand: Box::new(left),
                           op })
    }

    fn precedence(&self) -> Precedence {
        self.precedence
    }
}

/// Parses an assignment `name = value`.
///
/// Assignment is right-associative, so `a = b = c` is `a = (b = c)`. The
/// value is parsed before the target is checked.
///
/// # Errors
/// [`ParseError::InvalidAssignmentTarget`] if the left side is not a name.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignParselet;

impl InfixParselet for AssignParselet {
    fn parse(&self, parser: &mut Parser<'_>, left: Expr, _token: Token) -> ParseResult<Expr> {
        let value = parser.parse_expression(Precedence::Assignment.below())?;

        match left {
            Expr::Name { name } => Ok(Expr::Assign { name,
                                                     value: Box::new(value) }),
            _ => Err(ParseError::InvalidAssignmentTarget),
        }
    }

    fn precedence(&self) -> Precedence {
        Precedence::Assignment
    }
}

/// Parses the conditional operator `condition ? then : else`.
///
/// The then-branch is parsed from the lowest floor, since `:` delimits it.
/// The else-branch is parsed one level below conditional, so chained
/// conditionals nest to the right: `a ? b : c ? d : e` is
/// `a ? b : (c ? d : e)`.
///
/// # Errors
/// [`ParseError::ExpectedToken`] if the `:` is missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionalParselet;

impl InfixParselet for ConditionalParselet {
    fn parse(&self, parser: &mut Parser<'_>, left: Expr, _token: Token) -> ParseResult<Expr> {
        let then_branch = parser.parse_expression(Precedence::Unknown.level())?;
        parser.expect(TokenKind::Colon)?;
        let else_branch = parser.parse_expression(Precedence::Conditional.below())?;

        Ok(Expr::Conditional { condition:   Box::new(left),
                               then_branch: Box::new(then_branch),
                               else_branch: Box::new(else_branch), })
    }

    fn precedence(&self) -> Precedence {
        Precedence::Conditional
    }
}

/// Parses a call: an expression followed by a parenthesized argument list.
///
/// Any expression can be called, so `a(b)(c)` is a call of a call.
///
/// Grammar: `call := expression "(" (expression ("," expression)*)? ")"`
///
/// # Errors
/// [`ParseError::ExpectedToken`] if the list is not closed by `)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallParselet;

impl InfixParselet for CallParselet {
    fn parse(&self, parser: &mut Parser<'_>, left: Expr, _token: Token) -> ParseResult<Expr> {
        let arguments = parse_comma_separated(parser, TokenKind::RightParen)?;
        Ok(Expr::Call { callee: Box::new(left),
                        arguments })
    }

    fn precedence(&self) -> Precedence {
        Precedence::Call
    }
}
