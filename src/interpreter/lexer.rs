use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// The `print` keyword.
pub const PRINT_KEYWORD: &str = "print";

/// The kind of a lexical token.
///
/// Whitespace (spaces, tabs and stray newlines) separates tokens and is
/// skipped.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\n]+")]
pub enum TokenKind {
    /// `print`
    #[token("print")]
    Print,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `=`
    #[token("=")]
    Equals,
    /// Unsigned decimal digit runs such as `042`.
    #[regex(r"[0-9]+")]
    Number,
    /// Variable names such as `x` or `total2`.
    #[regex(r"[A-Za-z][A-Za-z0-9]*")]
    Identifier,
}

impl TokenKind {
    /// Upper-case name of the kind, as used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Print => "PRINT",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Equals => "EQUALS",
            Self::Number => "NUMBER",
            Self::Identifier => "IDENTIFIER",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified slice of source text.
///
/// `text` is the exact source substring: numbers keep their digit string and
/// identifiers keep their name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// The source text it was read from.
    pub text: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text)
    }
}

/// Splits one line of source into tokens.
///
/// The `print` keyword is matched as a fixed prefix before identifiers are
/// considered, so `printer` lexes as `print` followed by the identifier `er`.
///
/// # Errors
/// Returns [`LexError::UnexpectedCharacter`] for the first character that
/// does not start a token.
///
/// # Example
/// ```
/// use minipy::interpreter::lexer::{Token, TokenKind, tokenize};
///
/// let tokens = tokenize("print(12)").unwrap();
///
/// assert_eq!(tokens,
///            vec![Token::new(TokenKind::Print, "print"),
///                 Token::new(TokenKind::LParen, "("),
///                 Token::new(TokenKind::Number, "12"),
///                 Token::new(TokenKind::RParen, ")")]);
/// ```
pub fn tokenize(line: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(line);

    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        let Ok(kind) = kind else {
            return Err(unexpected_character(line, span.start));
        };
        let text = lexer.slice();

        if kind == TokenKind::Identifier && text.starts_with(PRINT_KEYWORD) {
            trace!(kind = %TokenKind::Print, text = PRINT_KEYWORD, start = span.start, "token");
            tokens.push(Token::new(TokenKind::Print, PRINT_KEYWORD));
            // Logos cannot rewind, so restart right after the keyword.
            lexer = TokenKind::lexer(line);
            lexer.bump(span.start + PRINT_KEYWORD.len());
            continue;
        }

        trace!(kind = %kind, text, start = span.start, "token");
        tokens.push(Token::new(kind, text));
    }

    Ok(tokens)
}

fn unexpected_character(line: &str, byte_offset: usize) -> LexError {
    let character = line[byte_offset..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
    let position = line[..byte_offset].chars().count();
    LexError::UnexpectedCharacter { character, position }
}
