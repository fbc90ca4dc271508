use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Applies `op` to two evaluated operands.
///
/// Addition, subtraction and multiplication are exact at any size. Division
/// rounds toward negative infinity.
///
/// # Errors
/// - `DivisionByZero` if `op` is `/` and `right` is zero.
///
/// # Example
/// ```
/// use minipy::{ast::BinaryOperator, interpreter::evaluator::binary::apply};
/// use num_bigint::BigInt;
///
/// let apply_small = |left: i64, op, right: i64| apply(&left.into(), op, &right.into());
///
/// assert_eq!(apply_small(2, BinaryOperator::Sub, 3).unwrap(), BigInt::from(-1));
/// assert_eq!(apply_small(-7, BinaryOperator::Div, 2).unwrap(), BigInt::from(-4));
/// assert!(apply_small(1, BinaryOperator::Div, 0).is_err());
/// ```
pub fn apply(left: &BigInt, op: BinaryOperator, right: &BigInt) -> EvalResult<BigInt> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div => {
            if right.is_zero() {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(left.div_floor(right))
        },
    }
}
