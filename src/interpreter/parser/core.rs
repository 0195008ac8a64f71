use std::sync::Arc;

use crate::{
    ast::Expr,
    error::{ParseError, ParseResult},
    interpreter::{
        lexer::{Token, TokenKind, Tokenizer},
        parser::{precedence::Precedence, registry::ParseletRegistry},
    },
};

/// Nesting budget of a single expression.
///
/// Every recursive [`Parser::parse_expression`] call spends
/// [`RECURSION_COST`] and every infix or postfix fold spends one, so the
/// budget bounds both the parser's own recursion and the height of the tree
/// the visitors later recurse over.
pub const MAX_NESTING: usize = 1024;

/// Budget spent by one level of parser recursion.
pub const RECURSION_COST: usize = 4;

/// A Pratt parser over one token stream.
///
/// The parser owns its tokenizer and one token of lookahead. Parsing
/// behavior comes entirely from the [`ParseletRegistry`] it was built with.
pub struct Parser<'source> {
    tokens:   Tokenizer<'source>,
    peeked:   Option<Token>,
    registry: Arc<ParseletRegistry>,
    nesting:  usize,
}

impl<'source> Parser<'source> {
    /// Creates a parser using the standard parselet table.
    #[must_use]
    pub fn new(tokens: Tokenizer<'source>) -> Self {
        Self::with_registry(tokens, ParseletRegistry::shared_standard())
    }

    /// Creates a parser using a custom parselet table.
    #[must_use]
    pub const fn with_registry(tokens: Tokenizer<'source>, registry: Arc<ParseletRegistry>) -> Self {
        Self { tokens,
               peeked: None,
               registry,
               nesting: 0 }
    }

    /// Parses one expression and requires the input to end after it.
    ///
    /// # Errors
    /// Any [`ParseError`] raised while parsing, or
    /// [`ParseError::UnexpectedToken`] for trailing input.
    pub fn parse(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression(Precedence::Unknown.level())?;
        let trailing = self.consume()?;
        if trailing.kind != TokenKind::Eof {
            return Err(ParseError::UnexpectedToken { token: trailing.text });
        }
        Ok(expr)
    }

    /// Parses an expression, folding in infix and postfix parselets while
    /// they bind tighter than `min_precedence`.
    ///
    /// The first token that does not bind tightly enough is left unconsumed.
    ///
    /// # Errors
    /// - [`ParseError::UnexpectedToken`] or
    ///   [`ParseError::UnexpectedEndOfInput`] if no prefix parselet exists for
    ///   the leading token.
    /// - [`ParseError::TooDeeplyNested`] once the expression exceeds
    ///   [`MAX_NESTING`].
    /// - Any error raised by a parselet.
    pub fn parse_expression(&mut self, min_precedence: u8) -> ParseResult<Expr> {
        let entry = self.nesting;
        let result = self.parse_nested(min_precedence);
        self.nesting = entry;
        result
    }

    fn parse_nested(&mut self, min_precedence: u8) -> ParseResult<Expr> {
        let registry = Arc::clone(&self.registry);

        self.spend(RECURSION_COST)?;
        let token = self.consume()?;
        let Some(prefix) = registry.prefix(token.kind) else {
            return Err(unexpected(token));
        };
        tracing::trace!(kind = ?token.kind, min_precedence, "prefix parselet");
        let mut left = prefix.parse(self, token)?;

        while min_precedence < self.precedence_of_next_token()?.level() {
            self.spend(1)?;
            let token = self.consume()?;
            let Some(infix) = registry.infix(token.kind) else {
                return Err(unexpected(token));
            };
            tracing::trace!(kind = ?token.kind, min_precedence, "infix parselet");
            left = infix.parse(self, left, token)?;
        }

        Ok(left)
    }

    fn spend(&mut self, cost: usize) -> ParseResult<()> {
        self.nesting += cost;
        if self.nesting > MAX_NESTING {
            tracing::debug!(nesting = self.nesting, "nesting budget exhausted");
            return Err(ParseError::TooDeeplyNested { limit: MAX_NESTING });
        }
        Ok(())
    }

    /// Consumes the next token if it has the given kind.
    ///
    /// # Errors
    /// Only lexing errors from a strict tokenizer.
    pub fn match_token(&mut self, kind: TokenKind) -> ParseResult<bool> {
        if self.peek()?.kind != kind {
            return Ok(false);
        }
        self.consume()?;
        Ok(true)
    }

    /// Consumes the next token, which must have the given kind.
    ///
    /// # Errors
    /// [`ParseError::ExpectedToken`] if the next token has another kind.
    pub fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        let next = self.peek()?;
        if next.kind != kind {
            return Err(ParseError::ExpectedToken { expected: kind,
                                                   found:    next.describe(), });
        }
        self.consume()
    }

    /// Returns the next token without consuming it.
    ///
    /// # Errors
    /// Only lexing errors from a strict tokenizer.
    pub fn peek(&mut self) -> ParseResult<&Token> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.tokens.try_next_token()?,
        };
        Ok(self.peeked.insert(token))
    }

    /// Consumes and returns the next token.
    ///
    /// # Errors
    /// Only lexing errors from a strict tokenizer.
    pub fn consume(&mut self) -> ParseResult<Token> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => Ok(self.tokens.try_next_token()?),
        }
    }

    /// The precedence of the infix/postfix parselet registered for the next
    /// token, or [`Precedence::Unknown`] if there is none.
    fn precedence_of_next_token(&mut self) -> ParseResult<Precedence> {
        let kind = self.peek()?.kind;
        Ok(self.registry
               .infix(kind)
               .map_or(Precedence::Unknown, |parselet| parselet.precedence()))
    }
}

/// Builds the error for a token no parselet accepts.
fn unexpected(token: Token) -> ParseError {
    match token.kind {
        TokenKind::Eof => ParseError::UnexpectedEndOfInput,
        _ => ParseError::UnexpectedToken { token: token.text },
    }
}
