use crate::{
    ast::Expr,
    error::ParseResult,
    interpreter::{
        lexer::Token,
        parser::{core::Parser, precedence::Precedence},
    },
};

/// A parsing behavior that starts an expression.
///
/// The leading token has already been consumed and is handed over; the
/// parselet may recurse into the parser for sub-expressions.
pub trait PrefixParselet: Send + Sync {
    /// Parses the expression started by `token`.
    fn parse(&self, parser: &mut Parser<'_>, token: Token) -> ParseResult<Expr>;
}

/// A parsing behavior that extends an already parsed expression.
///
/// Used for binary operators and postfix operators alike; postfix parselets
/// simply never recurse for a right operand.
pub trait InfixParselet: Send + Sync {
    /// Parses the rest of the expression, `left` being the operand already
    /// parsed and `token` the consumed operator.
    fn parse(&self, parser: &mut Parser<'_>, left: Expr, token: Token) -> ParseResult<Expr>;

    /// How tightly this parselet binds to its left operand.
    fn precedence(&self) -> Precedence;
}
