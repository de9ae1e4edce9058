use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::check_arity},
        value::core::Value,
    },
};

/// Transposes a matrix by swapping its rows and columns.
///
/// Only matrices are accepted; a vector has no second axis to swap with.
///
/// # Parameters
/// - `args`: Slice containing exactly one matrix value.
/// - `position`: Source position of the call.
///
/// # Returns
/// The transposed matrix, `ArityMismatch` unless exactly one argument is
/// given, or `UnsupportedOperand` for anything but a matrix.
///
/// # Example
/// ```
/// use calcula::{
///     ast::Position,
///     interpreter::{
///         evaluator::function::transpose::transpose,
///         value::{core::Value, matrix::Matrix},
///     },
/// };
///
/// // [[1,2],[3,4]] -> [[1,3],[2,4]]
/// let m = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]], Position::default()).unwrap();
/// let r = transpose(&[Value::Matrix(m)], Position::default()).unwrap();
///
/// assert_eq!(r.to_string(), "[[1, 3], [2, 4]]");
///
/// assert!(transpose(&[Value::Scalar(1.0)], Position::default()).is_err());
/// assert!(transpose(&[], Position::default()).is_err());
/// ```
pub fn transpose(args: &[Value], position: Position) -> EvalResult<Value> {
    check_arity("transpose", args, 1, position)?;

    match &args[0] {
        Value::Matrix(m) => Ok(Value::Matrix(m.transpose())),
        other => Err(RuntimeError::UnsupportedOperand { name: "transpose".to_string(),
                                                        operand: other.kind_name(),
                                                        position }),
    }
}
