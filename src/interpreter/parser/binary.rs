use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, Parsed},
            factor::parse_factor,
        },
    },
};

/// Parses addition and subtraction expressions, starting at `index`.
///
/// Handles the left-associative binary operators `+` and `-`, so `a + b - c`
/// groups as `(a + b) - c`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: The token sequence.
/// - `index`: Position of the first token of the expression.
///
/// # Returns
/// The expression and the index of the first token after it.
///
/// # Example
/// ```
/// use minipy::{
///     ast::{BinaryOperator::{Add, Sub}, Expr},
///     interpreter::{lexer::tokenize, parser::binary::parse_expression},
/// };
///
/// let tokens = tokenize("2+3-5").unwrap();
/// let (expr, next) = parse_expression(&tokens, 0).unwrap();
///
/// assert_eq!(expr, Expr::binary(Expr::binary(2, Add, 3), Sub, 5));
/// assert_eq!(next, 5);
/// ```
pub fn parse_expression(tokens: &[Token], index: usize) -> ParseResult<Parsed<Expr>> {
    if index >= tokens.len() {
        return Err(ParseError::EmptyExpression);
    }

    let (mut left, mut index) = parse_term(tokens, index)?;
    while let Some(token) = tokens.get(index)
          && matches!(token.kind, TokenKind::Plus | TokenKind::Minus)
    {
        let op = binary_operator(token)?;
        let (right, next) = parse_term(tokens, index + 1)?;
        left = Expr::binary(left, op, right);
        index = next;
    }
    Ok((left, index))
}

/// Parses multiplication-level expressions, starting at `index`.
///
/// Handles the left-associative operators `*` and `/`. Terms bind tighter
/// than expressions, so `2 + 3 * 4` groups as `2 + (3 * 4)`.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
pub fn parse_term(tokens: &[Token], index: usize) -> ParseResult<Parsed<Expr>> {
    let (mut left, mut index) = parse_factor(tokens, index)?;
    while let Some(token) = tokens.get(index)
          && matches!(token.kind, TokenKind::Multiply | TokenKind::Divide)
    {
        let op = binary_operator(token)?;
        let (right, next) = parse_factor(tokens, index + 1)?;
        left = Expr::binary(left, op, right);
        index = next;
    }
    Ok((left, index))
}

/// Maps an operator token to its [`BinaryOperator`] by its text.
fn binary_operator(token: &Token) -> ParseResult<BinaryOperator> {
    BinaryOperator::from_symbol(&token.text).ok_or_else(|| ParseError::UnknownOperator { text: token.text.clone() })
}
