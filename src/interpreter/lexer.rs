use logos::Logos;

use crate::error::LexError;

/// The raw lexical classes recognized by `logos`.
///
/// Whitespace is skipped by the lexer itself; every other character that
/// matches none of these patterns comes back as a lexing error.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum Lexeme {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `~`
    #[token("~")]
    Tilde,
    /// `!`
    #[token("!")]
    Bang,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Names such as `x` or `pow`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,
    /// Runs of digits and dots starting with a digit, such as `42` or `3.14`.
    /// The run is not validated here; `1.2.3` is a single token.
    #[regex(r"[0-9][0-9.]*")]
    Number,
}

/// The kind of a token.
///
/// Punctuators carry their own character as identity (see
/// [`TokenKind::as_char`]); the remaining kinds are sentinels whose text lives
/// in the [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// `~`
    Tilde,
    /// `!`
    Bang,
    /// `?`
    Question,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// End of input.
    Eof,
    /// An identifier.
    Name,
    /// A number literal.
    Number,
}

impl TokenKind {
    /// Returns the character of a punctuator kind, or `None` for sentinels.
    ///
    /// # Example
    /// ```
    /// use bantam::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::Caret.as_char(), Some('^'));
    /// assert_eq!(TokenKind::Name.as_char(), None);
    /// ```
    #[must_use]
    pub const fn as_char(self) -> Option<char> {
        let ch = match self {
            Self::LeftParen => '(',
            Self::RightParen => ')',
            Self::Comma => ',',
            Self::Assign => '=',
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Asterisk => '*',
            Self::Slash => '/',
            Self::Caret => '^',
            Self::Tilde => '~',
            Self::Bang => '!',
            Self::Question => '?',
            Self::Colon => ':',
            Self::Semicolon => ';',
            Self::Eof | Self::Name | Self::Number => return None,
        };
        Some(ch)
    }
}

impl From<Lexeme> for TokenKind {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::LeftParen => Self::LeftParen,
            Lexeme::RightParen => Self::RightParen,
            Lexeme::Comma => Self::Comma,
            Lexeme::Assign => Self::Assign,
            Lexeme::Plus => Self::Plus,
            Lexeme::Minus => Self::Minus,
            Lexeme::Asterisk => Self::Asterisk,
            Lexeme::Slash => Self::Slash,
            Lexeme::Caret => Self::Caret,
            Lexeme::Tilde => Self::Tilde,
            Lexeme::Bang => Self::Bang,
            Lexeme::Question => Self::Question,
            Lexeme::Colon => Self::Colon,
            Lexeme::Semicolon => Self::Semicolon,
            Lexeme::Name => Self::Name,
            Lexeme::Number => Self::Number,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self, self.as_char()) {
            (_, Some(ch)) => write!(f, "{ch}"),
            (Self::Name, None) => write!(f, "name"),
            (Self::Number, None) => write!(f, "number"),
            _ => write!(f, "end of input"),
        }
    }
}

/// A token: its kind and the source text it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of the token.
    pub kind: TokenKind,
    /// The source text; empty for end of input.
    pub text: String,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }

    /// Creates the end-of-input token.
    #[must_use]
    pub const fn eof() -> Self {
        Self { kind: TokenKind::Eof,
               text: String::new() }
    }

    /// Describes the token for error messages: its text, or `end of input`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.text),
        }
    }
}

/// A lazy, single-pass tokenizer over a complete in-memory input.
///
/// Once the input is exhausted every further call yields an end-of-input
/// token.
///
/// # Example
/// ```
/// use bantam::interpreter::lexer::{TokenKind, Tokenizer};
///
/// let mut tokens = Tokenizer::new("x1 = 2.5");
/// assert_eq!(tokens.next_token().text, "x1");
/// assert_eq!(tokens.next_token().kind, TokenKind::Assign);
/// assert_eq!(tokens.next_token().text, "2.5");
/// assert_eq!(tokens.next_token().kind, TokenKind::Eof);
/// assert_eq!(tokens.next_token().kind, TokenKind::Eof);
/// ```
pub struct Tokenizer<'source> {
    lexer:  logos::Lexer<'source, Lexeme>,
    strict: bool,
}

impl<'source> Tokenizer<'source> {
    /// Creates a tokenizer that skips unrecognized characters.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { lexer:  Lexeme::lexer(source),
               strict: false, }
    }

    /// Creates a tokenizer that rejects unrecognized characters with a
    /// [`LexError`].
    ///
    /// [`Tokenizer::try_next_token`] reports the rejection and iteration
    /// stops at it. [`Tokenizer::next_token`] cannot fail, so it skips the
    /// character as a lenient tokenizer would.
    ///
    /// # Example
    /// ```
    /// use bantam::{error::LexError, interpreter::lexer::Tokenizer};
    ///
    /// let mut tokens = Tokenizer::strict("a $");
    /// assert!(tokens.try_next_token().is_ok());
    /// assert_eq!(tokens.try_next_token(),
    ///            Err(LexError::UnexpectedCharacter { ch: '$', offset: 2 }));
    /// ```
    #[must_use]
    pub fn strict(source: &'source str) -> Self {
        Self { lexer:  Lexeme::lexer(source),
               strict: true, }
    }

    /// Returns `true` while unread input remains.
    ///
    /// Trailing whitespace counts as unread input; the next token is then the
    /// end-of-input token.
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.lexer.remainder().is_empty()
    }

    /// Returns the next token, skipping any character the lexer does not
    /// recognize, even in strict mode.
    pub fn next_token(&mut self) -> Token {
        loop {
            match self.try_next_token() {
                Ok(token) => return token,
                Err(error) => tracing::debug!(%error, "skipping rejected character"),
            }
        }
    }

    /// Returns the next token.
    ///
    /// # Errors
    /// Returns [`LexError::UnexpectedCharacter`] for an unrecognized character
    /// when the tokenizer is strict. The character is consumed either way.
    pub fn try_next_token(&mut self) -> Result<Token, LexError> {
        loop {
            match self.lexer.next() {
                Some(Ok(lexeme)) => return Ok(Token::new(lexeme.into(), self.lexer.slice())),
                Some(Err(())) => {
                    let offset = self.lexer.span().start;
                    let ch = self.lexer.slice().chars().next().unwrap_or_default();
                    if self.strict {
                        return Err(LexError::UnexpectedCharacter { ch, offset });
                    }
                    tracing::debug!(%ch, offset, "skipping unrecognized character");
                },
                None => return Ok(Token::eof()),
            }
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, end of input. A strict
    /// tokenizer also stops at the first rejected character.
    fn next(&mut self) -> Option<Self::Item> {
        match self.try_next_token() {
            Ok(token) => (token.kind != TokenKind::Eof).then_some(token),
            Err(error) => {
                tracing::debug!(%error, "token stream ended early");
                None
            },
        }
    }
}
