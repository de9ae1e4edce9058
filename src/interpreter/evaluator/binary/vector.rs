use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::evaluator::{binary::scalar::eval_scalar_op, core::EvalResult},
};

/// Applies an operator pairwise to two sequences of equal length.
///
/// # Errors
/// - `ShapeMismatch` if the lengths differ.
/// - Any scalar error (`DivisionByZero`, `ModuloByZero`) from an element pair.
///
/// # Example
/// ```
/// use calcula::{
///     ast::{BinaryOperator, Position},
///     interpreter::evaluator::binary::vector::eval_elementwise,
/// };
///
/// let out = eval_elementwise(BinaryOperator::Add, &[1.0, 2.0], &[10.0, 20.0], Position::default());
/// assert_eq!(out.unwrap(), vec![11.0, 22.0]);
/// ```
pub fn eval_elementwise(op: BinaryOperator,
                        left: &[f64],
                        right: &[f64],
                        position: Position)
                        -> EvalResult<Vec<f64>> {
    if left.len() != right.len() {
        return Err(RuntimeError::ShapeMismatch { details: format!("cannot apply '{op}' to vectors of length {} and {}",
                                                                  left.len(),
                                                                  right.len()),
                                                 position });
    }

    left.iter()
        .zip(right)
        .map(|(l, r)| eval_scalar_op(op, *l, *r, position))
        .collect()
}

/// Applies `element op scalar` to every element.
pub fn eval_broadcast_right(op: BinaryOperator,
                            elements: &[f64],
                            scalar: f64,
                            position: Position)
                            -> EvalResult<Vec<f64>> {
    elements.iter()
            .map(|e| eval_scalar_op(op, *e, scalar, position))
            .collect()
}

/// Applies `scalar op element` to every element.
///
/// Kept separate from [`eval_broadcast_right`] because `-`, `/` and `%` are not
/// commutative: `10 / [2, 5]` is `[5, 2]`.
pub fn eval_broadcast_left(op: BinaryOperator,
                           scalar: f64,
                           elements: &[f64],
                           position: Position)
                           -> EvalResult<Vec<f64>> {
    elements.iter()
            .map(|e| eval_scalar_op(op, scalar, *e, position))
            .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn length_mismatch_is_a_shape_error() {
        let err = eval_elementwise(BinaryOperator::Sub, &[1.0], &[1.0, 2.0], Position::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn broadcast_respects_operand_order() {
        let pos = Position::default();
        assert_eq!(eval_broadcast_left(BinaryOperator::Div, 10.0, &[2.0, 5.0], pos).unwrap(),
                   vec![5.0, 2.0]);
        assert_eq!(eval_broadcast_right(BinaryOperator::Div, &[2.0, 5.0], 10.0, pos).unwrap(),
                   vec![0.2, 0.5]);
    }

    #[test]
    fn zero_element_aborts_broadcast() {
        let err = eval_broadcast_left(BinaryOperator::Div, 1.0, &[1.0, 0.0], Position::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }
}
