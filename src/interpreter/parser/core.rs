use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::{Error, ParseError},
    interpreter::{
        lexer::{Token, tokenize},
        parser::{binary::parse_expression, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A parsed node paired with the index of the first token it did not consume.
pub type Parsed<T> = (T, usize);

/// Parses `tokens` as exactly one expression.
///
/// Unlike [`parse_expression`], every token must be consumed.
///
/// # Errors
/// - `EmptyExpression` if `tokens` is empty.
/// - `UnexpectedTrailingTokens` if anything follows the expression.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_full_expression(tokens: &[Token]) -> ParseResult<Expr> {
    let (expr, next) = parse_expression(tokens, 0)?;

    match tokens.get(next) {
        None => Ok(expr),
        Some(token) => Err(ParseError::UnexpectedTrailingTokens { token: token.clone() }),
    }
}

/// Lexes and parses a single source line into a statement.
///
/// `line_number` is only used to label the error.
///
/// # Errors
/// Returns [`Error::Lex`] or [`Error::Parse`] tagged with `line_number`.
///
/// # Example
/// ```
/// use minipy::{
///     ast::{BinaryOperator, Expr, Statement},
///     interpreter::parser::core::parse_line,
/// };
///
/// let statement = parse_line("x = 1 + 2", 1).unwrap();
///
/// assert_eq!(statement,
///            Statement::Assign { name:  "x".to_string(),
///                                value: Expr::binary(1, BinaryOperator::Add, 2), });
/// ```
pub fn parse_line(line: &str, line_number: usize) -> Result<Statement, Error> {
    let tokens = tokenize(line).map_err(|source| Error::Lex { line: line_number,
                                                              source })?;
    let statement = parse_statement(&tokens).map_err(|source| Error::Parse { line: line_number,
                                                                            source })?;
    debug!(line = line_number, %statement, "parsed statement");
    Ok(statement)
}
