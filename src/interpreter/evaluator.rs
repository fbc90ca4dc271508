/// Core evaluation logic and the variable environment.
///
/// Contains the `Environment`, statement and program execution, expression
/// evaluation and error propagation.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements checked integer arithmetic and floor division.
pub mod binary;
