use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Evaluates a scalar arithmetic operation.
///
/// Division and modulo by zero are checked explicitly; every other operation
/// follows IEEE-754 semantics.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Source position for error reporting.
///
/// # Returns
/// The computed number.
///
/// # Example
/// ```
/// use calcula::{
///     ast::{BinaryOperator, Position},
///     interpreter::evaluator::binary::scalar::eval_scalar_op,
/// };
///
/// let result = eval_scalar_op(BinaryOperator::Mul, 1.5, 2.0, Position::default()).unwrap();
/// assert_eq!(result, 3.0);
///
/// assert!(eval_scalar_op(BinaryOperator::Div, 1.0, 0.0, Position::default()).is_err());
/// ```
pub fn eval_scalar_op(op: BinaryOperator,
                      left: f64,
                      right: f64,
                      position: Position)
                      -> EvalResult<f64> {
    match op {
        BinaryOperator::Div if right == 0.0 => Err(RuntimeError::DivisionByZero { position }),
        BinaryOperator::Mod if right == 0.0 => Err(RuntimeError::ModuloByZero { position }),
        _ => Ok(op.apply(left, right)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn zero_checks_distinguish_division_and_modulo() {
        let pos = Position::default();
        let div = eval_scalar_op(BinaryOperator::Div, 3.0, 0.0, pos).unwrap_err();
        let rem = eval_scalar_op(BinaryOperator::Mod, 3.0, -0.0, pos).unwrap_err();

        assert_eq!(div.kind(), ErrorKind::DivisionByZero);
        assert_eq!(rem.kind(), ErrorKind::ModuloByZero);
    }

    #[test]
    fn modulo_keeps_sign_of_dividend() {
        assert_eq!(eval_scalar_op(BinaryOperator::Mod, -7.0, 3.0, Position::default()).unwrap(),
                   -1.0);
    }
}
