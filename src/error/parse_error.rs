use thiserror::Error;

use crate::{error::LexError, interpreter::lexer::TokenKind};

/// Result type used by the parser and by every parselet.
pub type ParseResult<T> = Result<T, ParseError>;

/// Represents all errors that can occur during parsing.
///
/// Every parse error is fatal: the parser stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token that cannot start or continue an expression here.
    #[error("Unexpected token: {token}.")]
    UnexpectedToken {
        /// The text of the token encountered.
        token: String,
    },
    /// Reached the end of input where an expression was required.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A required delimiter such as `)` or `:` was not found.
    #[error("Expected '{expected}' but found {found}.")]
    ExpectedToken {
        /// The token kind that was required.
        expected: TokenKind,
        /// Description of what was found instead.
        found:    String,
    },
    /// A number literal such as `1.2.3` could not be parsed.
    #[error("Invalid number literal: {text}.")]
    InvalidNumber {
        /// The literal text.
        text: String,
    },
    /// The left side of `=` was not a plain name.
    #[error("The left-hand of an assignment must be a name.")]
    InvalidAssignmentTarget,
    /// The expression nests deeper than the parser allows.
    #[error("Expression nested too deeply (limit {limit}).")]
    TooDeeplyNested {
        /// The nesting budget that was exceeded.
        limit: usize,
    },
    /// The strict tokenizer rejected a character.
    #[error(transparent)]
    Lex(#[from] LexError),
}
