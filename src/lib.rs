//! # minipy
//!
//! minipy is an interpreter for a tiny, Python-flavoured scripting language
//! written in Rust. A program is a sequence of lines, each either a
//! `print(...)` call or a `name = expr` assignment over integer arithmetic
//! with `+`, `-`, `*`, `/` and parentheses.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use tracing::debug;

use crate::{
    ast::Program,
    interpreter::{
        evaluator::core::{Environment, evaluate_program},
        parser::core::parse_line,
    },
};
pub use crate::error::Error;

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent source code as a tree, along with the `Node` wrapper accepted by
/// the evaluator. The AST is built by the parser and traversed by the
/// evaluator; every node renders back to canonical source via `Display`.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Each phase has its own error enum; [`Error`] wraps them for whole-program
/// runs and attaches the source line where lexing or parsing failed.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Turns one source line into tokens, then into a statement.
/// - Executes statements against an explicit variable environment.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses every non-blank line of `source` into a program.
///
/// Lines are parsed independently; blank or whitespace-only lines are skipped.
/// Nothing is evaluated here.
///
/// # Errors
/// Returns the first lexing or parsing failure, tagged with its 1-based line
/// number.
///
/// # Examples
/// ```
/// use minipy::parse_program;
///
/// let program = parse_program("a = 1\n\nprint(a + 2)\n").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// assert!(parse_program("print(1 +)").is_err());
/// ```
pub fn parse_program(source: &str) -> Result<Program, Error> {
    source.lines()
          .enumerate()
          .filter(|(_, line)| !line.trim().is_empty())
          .map(|(index, line)| parse_line(line, index + 1))
          .collect()
}

/// Runs `source` as a program, writing printed output to `out`.
///
/// The whole program is parsed before any statement runs. Evaluation uses a
/// fresh [`Environment`], which is returned once every statement has
/// succeeded.
///
/// # Errors
/// Returns an error if parsing or evaluation fails. Output written by the
/// statements that ran before a runtime failure remains in `out`.
///
/// # Examples
/// ```
/// let mut out = Vec::new();
/// let env = minipy::run("a = 1\nprint(a + 2)", &mut out).unwrap();
///
/// assert_eq!(out, b"3\n");
/// assert_eq!(env.get("a"), Some(&1.into()));
/// ```
pub fn run<W: Write>(source: &str, out: &mut W) -> Result<Environment, Error> {
    let program = parse_program(source)?;
    debug!(statements = program.statements.len(), "evaluating program");

    let mut env = Environment::new();
    evaluate_program(&program, &mut env, out)?;
    Ok(env)
}

/// Runs `source` and returns everything it printed.
///
/// # Examples
/// ```
/// use minipy::run_to_string;
///
/// assert_eq!(run_to_string("print()\nprint(1+2)").unwrap(), "\n3\n");
///
/// // Unknown variables are an error, not zero.
/// assert!(run_to_string("print(y)").is_err());
/// ```
pub fn run_to_string(source: &str) -> Result<String, Error> {
    let mut out = Vec::new();
    run(source, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
