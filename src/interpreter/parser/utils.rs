use crate::{
    ast::{BinaryOperator, Expr, PostfixOperator, PrefixOperator},
    error::ParseResult,
    interpreter::{
        lexer::TokenKind,
        parser::{core::Parser, precedence::Precedence},
    },
};

/// Parses a comma-separated list of expressions up to a closing token.
///
/// An immediately encountered closing token produces an empty list. Each
/// item is parsed from the lowest floor.
///
/// Grammar (simplified): `list := (expression ("," expression)*)? closing`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or the closing token is
/// missing.
pub(in crate::interpreter::parser) fn parse_comma_separated(parser: &mut Parser<'_>,
                                                            closing: TokenKind)
                                                            -> ParseResult<Vec<Expr>> {
    let mut items = Vec::new();
    if parser.match_token(closing)? {
        return Ok(items);
    }
    loop {
        items.push(parser.parse_expression(Precedence::Unknown.level())?);
        if !parser.match_token(TokenKind::Comma)? {
            break;
        }
    }
    parser.expect(closing)?;
    Ok(items)
}

/// Maps a token to its binary operator, if it is one.
///
/// # Example
/// ```
/// use bantam::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::utils::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Caret), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(TokenKind::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Asterisk => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Maps a token to its prefix operator, if it is one.
#[must_use]
pub const fn token_to_prefix_operator(kind: TokenKind) -> Option<PrefixOperator> {
    match kind {
        TokenKind::Plus => Some(PrefixOperator::Plus),
        TokenKind::Minus => Some(PrefixOperator::Minus),
        TokenKind::Tilde => Some(PrefixOperator::Tilde),
        TokenKind::Bang => Some(PrefixOperator::Bang),
        _ => None,
    }
}

/// Maps a token to its postfix operator, if it is one.
#[must_use]
pub const fn token_to_postfix_operator(kind: TokenKind) -> Option<PostfixOperator> {
    match kind {
        TokenKind::Bang => Some(PostfixOperator::Bang),
        _ => None,
    }
}
