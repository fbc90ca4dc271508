use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, parse_full_expression},
    },
};

/// Parses the tokens of one line into a statement.
///
/// A statement is one of:
/// - `print()`, an empty print.
/// - `print(<expr>)`, where everything between the outer parentheses is the
///   expression.
/// - `<identifier> = <expr>`, an assignment.
///
/// # Errors
/// Returns a `ParseError` if the line has any other shape or if the embedded
/// expression is malformed or followed by stray tokens.
///
/// # Example
/// ```
/// use minipy::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::statement::parse_statement},
/// };
///
/// let tokens = tokenize("print()").unwrap();
///
/// assert_eq!(parse_statement(&tokens).unwrap(), Statement::Print { value: None });
/// ```
pub fn parse_statement(tokens: &[Token]) -> ParseResult<Statement> {
    use TokenKind::{Equals, Identifier, LParen, Print, RParen};

    match tokens {
        [] => Err(ParseError::EmptyStatement),
        [print, open, close]
            if print.kind == Print && open.kind == LParen && close.kind == RParen =>
        {
            Ok(Statement::Print { value: None })
        },
        [print, open, inner @ .., close]
            if print.kind == Print && open.kind == LParen && close.kind == RParen =>
        {
            let value = parse_full_expression(inner)?;
            Ok(Statement::Print { value: Some(value) })
        },
        [print, rest @ ..] if print.kind == Print => Err(malformed_print(rest)),
        [name, equals, rest @ ..] if name.kind == Identifier && equals.kind == Equals => {
            let value = parse_full_expression(rest)?;
            Ok(Statement::Assign { name: name.text.clone(),
                                   value })
        },
        [first, ..] => Err(ParseError::InvalidStatement { token: first.clone() }),
    }
}

/// Diagnoses a `print` line that is not wrapped in a pair of parentheses.
fn malformed_print(rest: &[Token]) -> ParseError {
    match rest {
        [] => ParseError::UnexpectedEndOfInput { expected: "'(' after 'print'" },
        [open, ..] if open.kind != TokenKind::LParen => {
            ParseError::UnexpectedToken { token:    open.clone(),
                                          expected: "'(' after 'print'", }
        },
        [_] => ParseError::ExpectedClosingParen { found: None },
        [.., last] => ParseError::ExpectedClosingParen { found: Some(last.clone()) },
    }
}
