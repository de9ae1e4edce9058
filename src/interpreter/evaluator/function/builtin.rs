use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::check_arity},
        value::{core::Value, rational::Rational},
    },
};

/// Applies a real function to every number of its argument.
///
/// The generated functions accept exactly one argument.
/// - Scalars are mapped directly.
/// - Vectors and matrices are mapped element by element.
/// - Rationals are collapsed to their quotient first, producing a scalar.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `position`: Source position of the call.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed value, or `ArityMismatch`
/// unless exactly one argument is given.
///
/// # Example
/// ```
/// use calcula::{
///     ast::Position,
///     interpreter::{evaluator::function::builtin::sin, value::core::Value},
/// };
///
/// let r = sin(&[Value::Scalar(0.0)], Position::default()).unwrap();
/// assert_eq!(r, Value::Scalar(0.0));
///
/// let v = sin(&[Value::from(vec![0.0, 0.0])], Position::default()).unwrap();
/// assert_eq!(v, Value::from(vec![0.0, 0.0]));
///
/// assert!(sin(&[], Position::default()).is_err());
/// ```
macro_rules! elementwise_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[Value], position: Position) -> EvalResult<Value> {
            check_arity(stringify!($fname), args, 1, position)?;
            Ok(args[0].map_elements(f64::$real_fn))
        }
    };
}

elementwise_builtin!(sin, sin);
elementwise_builtin!(cos, cos);

/// Builds a rational from a scalar, with denominator 1.
///
/// # Errors
/// - `ArityMismatch` unless exactly one argument is given.
/// - `UnsupportedOperand` for anything but a scalar.
///
/// # Example
/// ```
/// use calcula::{
///     ast::Position,
///     interpreter::{evaluator::function::builtin::create_rat, value::core::Value},
/// };
///
/// let r = create_rat(&[Value::Scalar(3.0)], Position::default()).unwrap();
/// assert_eq!(r.to_string(), "3/1");
/// ```
pub fn create_rat(args: &[Value], position: Position) -> EvalResult<Value> {
    check_arity("create_rat", args, 1, position)?;

    match &args[0] {
        Value::Scalar(s) => Ok(Value::Rational(Rational::from_scalar(*s))),
        other => Err(RuntimeError::UnsupportedOperand { name: "create_rat".to_string(),
                                                        operand: other.kind_name(),
                                                        position }),
    }
}

/// Brings a rational to lowest terms.
///
/// Scalars pass through unchanged; integral fractions are divided by their
/// gcd and the sign is moved to the numerator.
///
/// # Errors
/// - `ArityMismatch` unless exactly one argument is given.
/// - `UnsupportedOperand` for vectors and matrices.
///
/// # Example
/// ```
/// use calcula::{
///     ast::Position,
///     interpreter::{
///         evaluator::function::builtin::reduce,
///         value::{core::Value, rational::Rational},
///     },
/// };
///
/// let r = Rational::new(4.0, 8.0, Position::default()).unwrap();
/// let reduced = reduce(&[Value::Rational(r)], Position::default()).unwrap();
///
/// assert_eq!(reduced.to_string(), "1/2");
/// ```
pub fn reduce(args: &[Value], position: Position) -> EvalResult<Value> {
    check_arity("reduce", args, 1, position)?;

    match &args[0] {
        Value::Rational(r) => Ok(Value::Rational(r.reduced())),
        Value::Scalar(s) => Ok(Value::Scalar(*s)),
        other => Err(RuntimeError::UnsupportedOperand { name: "reduce".to_string(),
                                                        operand: other.kind_name(),
                                                        position }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, interpreter::value::matrix::Matrix};

    #[test]
    fn cos_of_rational_uses_the_quotient() {
        let r = Rational::new(0.0, 7.0, Position::default()).unwrap();
        assert_eq!(cos(&[Value::Rational(r)], Position::default()).unwrap(), Value::Scalar(1.0));
    }

    #[test]
    fn cos_maps_matrices() {
        let m = Matrix::new(vec![vec![0.0], vec![0.0]], Position::default()).unwrap();
        let out = cos(&[Value::Matrix(m)], Position::default()).unwrap();
        assert_eq!(out.to_string(), "[[1], [1]]");
    }

    #[test]
    fn create_rat_rejects_vectors() {
        let err = create_rat(&[Value::from(vec![1.0])], Position::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperand);
    }

    #[test]
    fn direct_calls_check_their_arity() {
        let one = Value::Scalar(1.0);
        for builtin in [sin, cos, create_rat, reduce] {
            let none = builtin(&[], Position::default()).unwrap_err();
            assert_eq!(none.kind(), ErrorKind::ArityMismatch);

            let two = builtin(&[one.clone(), one.clone()], Position::default()).unwrap_err();
            assert_eq!(two.kind(), ErrorKind::ArityMismatch);
        }
    }

    #[test]
    fn reduce_moves_sign_to_numerator() {
        let r = Rational::new(3.0, -9.0, Position::default()).unwrap();
        let out = reduce(&[Value::Rational(r)], Position::default()).unwrap();
        assert_eq!(out.to_string(), "-1/3");
    }
}
