use num_bigint::BigInt;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_expression,
            core::{ParseResult, Parsed},
        },
    },
};

const OPERAND: &str = "a number, a name or '('";

/// Parses a single operand, starting at `index`.
///
/// An operand is a number literal, a variable name, or a parenthesized
/// expression. Parentheses recurse back to the lowest precedence tier.
///
/// The rule is: `factor := NUMBER | IDENTIFIER | "(" expression ")"`
///
/// # Errors
/// - `UnexpectedEndOfInput` if there is no token at `index`.
/// - `UnexpectedToken` if the token cannot start an operand.
/// - `ExpectedClosingParen` if a `(` is not matched.
/// - `InvalidNumber` for a number token that is not a digit string.
///
/// # Example
/// ```
/// use minipy::{
///     ast::{BinaryOperator::Add, Expr},
///     interpreter::{lexer::tokenize, parser::factor::parse_factor},
/// };
///
/// let tokens = tokenize("(1+2)*3").unwrap();
///
/// assert_eq!(parse_factor(&tokens, 0).unwrap(), (Expr::binary(1, Add, 2), 5));
/// ```
pub fn parse_factor(tokens: &[Token], index: usize) -> ParseResult<Parsed<Expr>> {
    let Some(token) = tokens.get(index) else {
        return Err(ParseError::UnexpectedEndOfInput { expected: OPERAND });
    };

    match token.kind {
        TokenKind::Number => Ok((Expr::Number(parse_number(&token.text)?), index + 1)),
        TokenKind::Identifier => Ok((Expr::name(token.text.as_str()), index + 1)),
        TokenKind::LParen => {
            let (expr, next) = parse_expression(tokens, index + 1)?;
            match tokens.get(next) {
                Some(Token { kind: TokenKind::RParen,
                             .. }) => Ok((expr, next + 1)),
                found => Err(ParseError::ExpectedClosingParen { found: found.cloned() }),
            }
        },
        _ => Err(ParseError::UnexpectedToken { token:    token.clone(),
                                               expected: OPERAND, }),
    }
}

/// Converts a digit string of any length to an integer literal.
fn parse_number(text: &str) -> ParseResult<BigInt> {
    let invalid = || ParseError::InvalidNumber { text: text.to_string() };
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    text.parse().map_err(|_| invalid())
}
