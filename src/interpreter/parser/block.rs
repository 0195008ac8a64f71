use crate::{
    ast::Block,
    error::ParseResult,
    interpreter::{
        lexer::TokenKind,
        parser::{core::Parser, precedence::Precedence},
    },
};

impl Parser<'_> {
    /// Parses a sequence of expressions until the end of input.
    ///
    /// Each expression may be followed by one `;`. Separators are optional
    /// because an expression ends at the first token that cannot continue
    /// it, so `a b c` and `a; b c;` both hold three expressions.
    ///
    /// Grammar: `block := (expression ";"?)*`
    ///
    /// # Errors
    /// The first [`ParseError`](crate::error::ParseError) raised by any
    /// expression. A token that can neither start nor continue an expression,
    /// such as a stray `)`, is reported rather than skipped.
    pub fn parse_block(&mut self) -> ParseResult<Block> {
        let mut expressions = Vec::new();

        while self.peek()?.kind != TokenKind::Eof {
            expressions.push(self.parse_expression(Precedence::Unknown.level())?);
            self.match_token(TokenKind::Semicolon)?;
        }

        tracing::debug!(expressions = expressions.len(), "parsed block");
        Ok(Block::new(expressions))
    }
}
