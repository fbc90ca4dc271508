use std::{collections::HashMap, io::Write};

use num_bigint::BigInt;
use tracing::debug;

use crate::{
    ast::{Expr, Node, Program, Statement},
    error::RuntimeError,
    interpreter::evaluator::binary::apply,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the variables of one program run.
///
/// A single flat namespace: assignments create or overwrite bindings, name
/// references read them. A fresh `Environment` is created for every run, so
/// independent programs never observe each other's variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    variables: HashMap<String, BigInt>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BigInt> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn assign(&mut self, name: impl Into<String>, value: impl Into<BigInt>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BigInt)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<BigInt>> FromIterator<(K, V)> for Environment {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self { variables: iter.into_iter()
                              .map(|(name, value)| (name.into(), value.into()))
                              .collect(), }
    }
}

/// Evaluates any node against `env`, writing printed output to `out`.
///
/// Programs and statements are executed. A bare expression has no effect of
/// its own and is rejected.
///
/// # Errors
/// - `UnsupportedNode` for [`Node::Expression`].
/// - Any error raised while executing the program or statement.
pub fn evaluate<W: Write>(node: &Node, env: &mut Environment, out: &mut W) -> EvalResult<()> {
    match node {
        Node::Program(program) => evaluate_program(program, env, out),
        Node::Statement(statement) => evaluate_statement(statement, env, out),
        Node::Expression(_) => Err(RuntimeError::UnsupportedNode { kind: node.kind() }),
    }
}

/// Executes the statements of `program` in order.
///
/// The first failing statement aborts the run; output written by the
/// statements before it is left in `out`.
pub fn evaluate_program<W: Write>(program: &Program,
                                  env: &mut Environment,
                                  out: &mut W)
                                  -> EvalResult<()> {
    for statement in &program.statements {
        evaluate_statement(statement, env, out)?;
    }
    Ok(())
}

/// Executes a single statement.
///
/// # Example
/// ```
/// use minipy::{
///     ast::{BinaryOperator, Expr, Statement},
///     interpreter::evaluator::core::{Environment, evaluate_statement},
/// };
///
/// let mut env = Environment::new();
/// let mut out = Vec::new();
/// let statement = Statement::Print { value: Some(Expr::binary(2, BinaryOperator::Mul, 21)) };
///
/// evaluate_statement(&statement, &mut env, &mut out).unwrap();
///
/// assert_eq!(out, b"42\n");
/// ```
pub fn evaluate_statement<W: Write>(statement: &Statement,
                                    env: &mut Environment,
                                    out: &mut W)
                                    -> EvalResult<()> {
    match statement {
        Statement::Print { value: None } => writeln!(out)?,
        Statement::Print { value: Some(expr) } => {
            let value = evaluate_expression(expr, env)?;
            writeln!(out, "{value}")?;
        },
        Statement::Assign { name, value } => {
            let value = evaluate_expression(value, env)?;
            debug!(name = name.as_str(), %value, "assign");
            env.assign(name.as_str(), value);
        },
    }
    Ok(())
}

/// Evaluates an expression to an integer.
///
/// Operands are evaluated left before right. Expressions never modify the
/// environment.
///
/// # Errors
/// - `UnknownVariable` if a name is not bound in `env`.
/// - `DivisionByZero` from arithmetic.
pub fn evaluate_expression(expr: &Expr, env: &Environment) -> EvalResult<BigInt> {
    match expr {
        Expr::Number(value) => Ok(value.clone()),
        Expr::Name { identifier } => {
            env.get(identifier)
               .cloned()
               .ok_or_else(|| RuntimeError::UnknownVariable { name: identifier.clone() })
        },
        Expr::BinaryOp { left, op, right } => {
            let left = evaluate_expression(left, env)?;
            let right = evaluate_expression(right, env)?;
            apply(&left, *op, &right)
        },
    }
}
