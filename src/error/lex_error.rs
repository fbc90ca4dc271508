use thiserror::Error;

/// Represents all errors that can occur during lexing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that does not begin any token.
    #[error("Unexpected character '{character}' at position {position}.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character offset within the line.
        position:  usize,
    },
}
