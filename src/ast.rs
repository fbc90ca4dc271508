use std::fmt;

use num_bigint::BigInt;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Numeric literals are stored directly as arbitrary-size integers. Every
/// other expression is either a variable reference or a binary operation over
/// two sub-expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal such as `42`.
    Number(BigInt),
    /// Reference to a variable by name.
    Name {
        /// Name of the variable.
        identifier: String,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary operation from two operands.
    ///
    /// ## Example
    /// ```
    /// use minipy::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(2, BinaryOperator::Add, Expr::name("x"));
    ///
    /// assert_eq!(sum.to_string(), "2 + x");
    /// ```
    #[must_use]
    pub fn binary(left: impl Into<Self>, op: BinaryOperator, right: impl Into<Self>) -> Self {
        Self::BinaryOp { left: Box::new(left.into()),
                         op,
                         right: Box::new(right.into()) }
    }

    /// Builds a variable reference.
    #[must_use]
    pub fn name(identifier: impl Into<String>) -> Self {
        Self::Name { identifier: identifier.into() }
    }

    /// Binding strength of the expression when it appears as an operand.
    ///
    /// Literals and names are atomic and never need parentheses.
    const fn precedence(&self) -> u8 {
        match self {
            Self::Number(_) | Self::Name { .. } => u8::MAX,
            Self::BinaryOp { op, .. } => op.precedence(),
        }
    }
}

impl From<BigInt> for Expr {
    fn from(value: BigInt) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Floor division (`/`)
    Div,
}

impl BinaryOperator {
    /// Looks up the operator spelled by `symbol`.
    ///
    /// ## Example
    /// ```
    /// use minipy::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("*"), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_symbol("%"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    /// The source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Additive operators bind looser than multiplicative ones.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }
}

/// Represents a top-level statement.
///
/// Every non-blank source line parses to exactly one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `print()` or `print(expr)`.
    Print {
        /// The value to print; `None` prints an empty line.
        value: Option<Expr>,
    },
    /// `name = expr`.
    Assign {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
    },
}

/// The root of a multi-statement program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    #[must_use]
    pub const fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

impl FromIterator<Statement> for Program {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Any node the evaluator can be handed.
///
/// Only programs and statements have an effect; a bare expression at this
/// level is rejected at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A whole program.
    Program(Program),
    /// A single statement.
    Statement(Statement),
    /// A bare expression.
    Expression(Expr),
}

impl Node {
    /// Short name of the node variant, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Program(_) => "program",
            Self::Statement(_) => "statement",
            Self::Expression(_) => "expression",
        }
    }
}

impl From<Program> for Node {
    fn from(program: Program) -> Self {
        Self::Program(program)
    }
}

impl From<Statement> for Node {
    fn from(statement: Statement) -> Self {
        Self::Statement(statement)
    }
}

impl From<Expr> for Node {
    fn from(expr: Expr) -> Self {
        Self::Expression(expr)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Renders the canonical source form of an expression.
///
/// Parentheses are emitted only where the tree would otherwise re-parse
/// differently: around a looser left operand, and around a right operand that
/// binds no tighter than its parent.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Name { identifier } => f.write_str(identifier),
            Self::BinaryOp { left, op, right } => {
                write_operand(f, left, left.precedence() < op.precedence())?;
                write!(f, " {op} ")?;
                write_operand(f, right, right.precedence() <= op.precedence())
            },
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, operand: &Expr, parenthesize: bool) -> fmt::Result {
    if parenthesize { write!(f, "({operand})") } else { write!(f, "{operand}") }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Print { value: None } => f.write_str("print()"),
            Self::Print { value: Some(value) } => write!(f, "print({value})"),
            Self::Assign { name, value } => write!(f, "{name} = {value}"),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{statement}")?;
        }
        Ok(())
    }
}
