/// The evaluator module executes AST nodes.
///
/// The evaluator walks statements against an explicit variable environment,
/// computes integer results and writes printed output to a caller-supplied
/// sink.
///
/// # Responsibilities
/// - Executes `print` and assignment statements in program order.
/// - Resolves names and applies arithmetic operators.
/// - Reports runtime errors such as unbound names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source lines for further parsing.
///
/// The lexer reads one line of raw source text and produces the sequence of
/// tokens it contains: the `print` keyword, punctuation, operators, numbers
/// and identifiers. This is the first stage of interpretation.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with three tiers (statement, additive
/// expression, multiplicative term) plus parenthesized factors. Every
/// sub-parser takes and returns an explicit token index instead of mutating a
/// shared cursor.
pub mod parser;
