/// Shared parser types and whole-line entry points.
///
/// Holds the `ParseResult` alias, the index-threaded `Parsed` pair, and the
/// helpers that lex and parse a complete line or a complete expression.
pub mod core;

/// Statement dispatch.
///
/// Recognizes `print()`, `print(expr)` and `name = expr` lines.
pub mod statement;

/// Additive and multiplicative expression tiers.
///
/// Folds runs of same-precedence operators left-associatively.
pub mod binary;

/// Operands: numbers, names and parenthesized sub-expressions.
pub mod factor;
