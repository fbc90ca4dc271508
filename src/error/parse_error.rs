use thiserror::Error;

use crate::interpreter::lexer::Token;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line produced no tokens at all.
    #[error("Empty statement.")]
    EmptyStatement,
    /// An expression was required but no tokens were left for it.
    #[error("Empty expression.")]
    EmptyExpression,
    /// Found a token of the wrong kind.
    #[error("Unexpected token {token}, expected {expected}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    Token,
        /// What the parser was looking for.
        expected: &'static str,
    },
    /// Ran out of tokens while something was still required.
    #[error("Unexpected end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: &'static str,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Expected closing parenthesis ')' but found {}.", describe(.found.as_ref()))]
    ExpectedClosingParen {
        /// The token found in its place, if any.
        found: Option<Token>,
    },
    /// Found extra tokens after parsing should have completed.
    #[error("Extra tokens after expression, starting at {token}.")]
    UnexpectedTrailingTokens {
        /// The first leftover token.
        token: Token,
    },
    /// The line is neither a `print` call nor an assignment.
    #[error("Invalid statement starting with {token}. Expected 'print(...)' or 'name = ...'.")]
    InvalidStatement {
        /// The first token of the line.
        token: Token,
    },
    /// A `NUMBER` token whose text is not a digit string.
    #[error("Invalid number literal '{text}'.")]
    InvalidNumber {
        /// The token text.
        text: String,
    },
    /// An operator token whose text is not one of `+ - * /`.
    #[error("Unknown operator '{text}'.")]
    UnknownOperator {
        /// The token text.
        text: String,
    },
}

fn describe(token: Option<&Token>) -> String {
    token.map_or_else(|| "end of input".to_string(), ToString::to_string)
}
