use thiserror::Error;

/// Represents the errors a strict tokenizer can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that is neither whitespace, a punctuator, nor part of a
    /// name or number.
    #[error("Unexpected character '{ch}' at offset {offset}.")]
    UnexpectedCharacter {
        /// The rejected character.
        ch:     char,
        /// Byte offset of the character in the source.
        offset: usize,
    },
}
