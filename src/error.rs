/// Lexing errors.
///
/// Raised when a source line contains a character that starts no token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token sequence into
/// a statement: malformed statements, missing operands, unmatched parentheses,
/// leftover tokens and malformed literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unbound
/// variables, division by zero, unsupported nodes and
/// failures writing program output.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure surfaced by running a whole program.
///
/// Lexing and parsing happen line by line, so those failures carry the
/// 1-based source line they occurred on.
#[derive(Debug, Error)]
pub enum Error {
    /// A line could not be tokenized.
    #[error("Error on line {line}: {source}")]
    Lex {
        /// The source line where the error occurred.
        line:   usize,
        /// The underlying lexer failure.
        source: LexError,
    },
    /// A line could not be parsed into a statement.
    #[error("Error on line {line}: {source}")]
    Parse {
        /// The source line where the error occurred.
        line:   usize,
        /// The underlying parser failure.
        source: ParseError,
    },
    /// Evaluation of the program failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
