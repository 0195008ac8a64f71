use std::{
    collections::HashMap,
    sync::{Arc, LazyLock},
};

use crate::interpreter::{
    lexer::TokenKind,
    parser::{
        binary::{AssignParselet, BinaryOperatorParselet, CallParselet, ConditionalParselet,
                 PostfixOperatorParselet},
        parselet::{InfixParselet, PrefixParselet},
        precedence::{Associativity, Precedence},
        unary::{GroupParselet, NameParselet, NumberParselet, PrefixOperatorParselet},
    },
};

/// The standard table, built once and shared by every parser that does not
/// bring its own.
static STANDARD: LazyLock<Arc<ParseletRegistry>> =
    LazyLock::new(|| Arc::new(ParseletRegistry::standard()));

/// Maps token kinds to parsing behavior.
///
/// A kind has at most one prefix parselet and at most one infix/postfix
/// parselet. The registry cannot be changed once built; use
/// [`ParseletRegistry::builder`] to assemble a custom one.
pub struct ParseletRegistry {
    prefix: HashMap<TokenKind, Box<dyn PrefixParselet>>,
    infix:  HashMap<TokenKind, Box<dyn InfixParselet>>,
}

impl ParseletRegistry {
    /// Starts an empty registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder { prefix: HashMap::new(),
                          infix:  HashMap::new(), }
    }

    /// Builds the standard table:
    ///
    /// | token   | prefix              | infix/postfix                      |
    /// |---------|---------------------|------------------------------------|
    /// | name    | name                |                                    |
    /// | number  | number              |                                    |
    /// | `(`     | group               | call (`Call`)                      |
    /// | `=`     |                     | assignment (`Assignment`, right)   |
    /// | `?`     |                     | conditional (`Conditional`, right) |
    /// | `+ -`   | unary (`Prefix`)    | binary (`Sum`, left)               |
    /// | `* /`   |                     | binary (`Product`, left)           |
    /// | `^`     |                     | binary (`Exponent`, right)         |
    /// | `~`     | unary (`Prefix`)    |                                    |
    /// | `!`     | unary (`Prefix`)    | factorial (`Postfix`)              |
    #[must_use]
    pub fn standard() -> Self {
        Self::standard_builder().build()
    }

    /// Starts from the standard table, so that callers can add or replace
    /// parselets.
    #[must_use]
    pub fn standard_builder() -> RegistryBuilder {
        Self::builder().prefix(TokenKind::Name, NameParselet)
                       .prefix(TokenKind::Number, NumberParselet)
                       .prefix(TokenKind::LeftParen, GroupParselet)
                       .infix(TokenKind::Assign, AssignParselet)
                       .infix(TokenKind::Question, ConditionalParselet)
                       .infix(TokenKind::LeftParen, CallParselet)
                       .prefix(TokenKind::Plus, PrefixOperatorParselet::new(Precedence::Prefix))
                       .prefix(TokenKind::Minus, PrefixOperatorParselet::new(Precedence::Prefix))
                       .prefix(TokenKind::Tilde, PrefixOperatorParselet::new(Precedence::Prefix))
                       .prefix(TokenKind::Bang, PrefixOperatorParselet::new(Precedence::Prefix))
                       .postfix(TokenKind::Bang, PostfixOperatorParselet::new(Precedence::Postfix))
                       .infix(TokenKind::Plus, BinaryOperatorParselet::left(Precedence::Sum))
                       .infix(TokenKind::Minus, BinaryOperatorParselet::left(Precedence::Sum))
                       .infix(TokenKind::Asterisk, BinaryOperatorParselet::left(Precedence::Product))
                       .infix(TokenKind::Slash, BinaryOperatorParselet::left(Precedence::Product))
                       .infix(TokenKind::Caret,
                              BinaryOperatorParselet::new(Precedence::Exponent,
                                                          Associativity::Right))
    }

    /// Returns the shared standard table.
    #[must_use]
    pub fn shared_standard() -> Arc<Self> {
        Arc::clone(&STANDARD)
    }

    /// The prefix parselet for `kind`, if any.
    #[must_use]
    pub fn prefix(&self, kind: TokenKind) -> Option<&dyn PrefixParselet> {
        self.prefix.get(&kind).map(AsRef::as_ref)
    }

    /// The infix or postfix parselet for `kind`, if any.
    #[must_use]
    pub fn infix(&self, kind: TokenKind) -> Option<&dyn InfixParselet> {
        self.infix.get(&kind).map(AsRef::as_ref)
    }
}

/// Collects parselets for a [`ParseletRegistry`].
///
/// Registering a second parselet of the same family for a kind replaces the
/// first.
///
/// ## Example
/// ```
/// use std::sync::Arc;
///
/// use bantam::interpreter::{
///     lexer::{TokenKind, Tokenizer},
///     parser::{
///         binary::BinaryOperatorParselet,
///         core::Parser,
///         precedence::Precedence,
///         registry::ParseletRegistry,
///         unary::NameParselet,
///     },
/// };
///
/// // `^` as a left-associative operator.
/// let registry = ParseletRegistry::builder()
///     .prefix(TokenKind::Name, NameParselet)
///     .infix(TokenKind::Caret, BinaryOperatorParselet::left(Precedence::Exponent))
///     .build();
///
/// let mut parser = Parser::with_registry(Tokenizer::new("a ^ b ^ c"), Arc::new(registry));
/// let expr = parser.parse().unwrap();
/// assert_eq!(bantam::print(&expr), "((a ^ b) ^ c)");
/// ```
pub struct RegistryBuilder {
    prefix: HashMap<TokenKind, Box<dyn PrefixParselet>>,
    infix:  HashMap<TokenKind, Box<dyn InfixParselet>>,
}

impl RegistryBuilder {
    /// Registers a prefix parselet.
    #[must_use]
    pub fn prefix(mut self, kind: TokenKind, parselet: impl PrefixParselet + 'static) -> Self {
        self.prefix.insert(kind, Box::new(parselet));
        self
    }

    /// Registers an infix parselet.
    #[must_use]
    pub fn infix(mut self, kind: TokenKind, parselet: impl InfixParselet + 'static) -> Self {
        self.infix.insert(kind, Box::new(parselet));
        self
    }

    /// Registers a postfix parselet. Postfix parselets share the infix table.
    #[must_use]
    pub fn postfix(self, kind: TokenKind, parselet: impl InfixParselet + 'static) -> Self {
        self.infix(kind, parselet)
    }

    /// Freezes the registry.
    #[must_use]
    pub fn build(self) -> ParseletRegistry {
        ParseletRegistry { prefix: self.prefix,
                           infix:  self.infix, }
    }
}
