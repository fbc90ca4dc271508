use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Tried to read a variable that has not been assigned.
    #[error("Name '{name}' is not defined.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Division with a zero divisor.
    #[error("Division by zero.")]
    DivisionByZero,
    /// The evaluator was handed a node it cannot execute.
    #[error("Cannot evaluate a bare {kind} as a statement.")]
    UnsupportedNode {
        /// The kind of node received.
        kind: &'static str,
    },
    /// Writing program output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
