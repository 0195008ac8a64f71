use crate::{
    ast::Expr,
    error::{ParseError, ParseResult},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::Parser, parselet::PrefixParselet, precedence::Precedence,
            utils::token_to_prefix_operator,
        },
    },
};

/// Parses a name into [`Expr::Name`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NameParselet;

impl PrefixParselet for NameParselet {
    fn parse(&self, _parser: &mut Parser<'_>, token: Token) -> ParseResult<Expr> {
        Ok(Expr::Name { name: token.text })
    }
}

/// Parses a number literal into [`Expr::Number`].
///
/// The tokenizer accepts any run of digits and dots, so the literal is
/// validated here.
///
/// # Errors
/// [`ParseError::InvalidNumber`] for literals such as `1.2.3`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberParselet;

impl PrefixParselet for NumberParselet {
    fn parse(&self, _parser: &mut Parser<'_>, token: Token) -> ParseResult<Expr> {
        match token.text.parse::<f64>() {
            Ok(value) => Ok(Expr::Number { text: token.text,
                                           value }),
            Err(_) => Err(ParseError::InvalidNumber { text: token.text }),
        }
    }
}

/// Parses a parenthesized expression.
///
/// Grouping only steers parsing; it contributes no node to the tree, so
/// `(a)` and `a` parse identically.
///
/// Grammar: `group := "(" expression ")"`
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupParselet;

impl PrefixParselet for GroupParselet {
    fn parse(&self, parser: &mut Parser<'_>, _token: Token) -> ParseResult<Expr> {
        let expr = parser.parse_expression(Precedence::Unknown.level())?;
        parser.expect(TokenKind::RightParen)?;
        Ok(expr)
    }
}

/// Parses a unary operator (`+ - ~ !`) applied to the operand that follows.
///
/// The operand is parsed at this parselet's precedence, so `-a * b` is
/// `(-a) * b`, while operators binding tighter than prefix, like postfix
/// `!`, stay inside: `-a!` is `-(a!)`.
///
/// # Errors
/// [`ParseError::UnexpectedToken`] if registered for a token that is not a
/// prefix operator.
#[derive(Debug, Clone, Copy)]
pub struct PrefixOperatorParselet {
    precedence: Precedence,
}

impl PrefixOperatorParselet {
    /// Creates a prefix operator parselet binding at `precedence`.
    #[must_use]
    pub const fn new(precedence: Precedence) -> Self {
        Self { precedence }
    }
}

impl PrefixParselet for PrefixOperatorParselet {
    fn parse(&self, parser: &mut Parser<'_>, token: Token) -> ParseResult<Expr> {
        let Some(op) = token_to_prefix_operator(token.kind) else {
            return Err(ParseError::UnexpectedToken { token: token.text });
        };
        let operand = parser.parse_expression(self.precedence.level())?;
        Ok(Expr::Prefix { op,
                          operand: Box::new(operand) })
    }
}
