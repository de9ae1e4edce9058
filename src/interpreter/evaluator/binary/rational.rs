use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::rational::Rational},
};

/// Combines two fractions.
///
/// With `left = a/b` and `right = c/d`:
///
/// | op  | result              |
/// |-----|---------------------|
/// | `+` | `(ad + cb) / bd`    |
/// | `-` | `(ad - cb) / bd`    |
/// | `*` | `ac / bd`           |
/// | `/` | `ad / bc`           |
/// | `%` | `(ad % cb) / bd`    |
///
/// The result is not reduced.
///
/// # Errors
/// - `DivisionByZero` for `/` by a zero fraction.
/// - `ModuloByZero` for `%` by a zero fraction.
///
/// # Example
/// ```
/// use calcula::{
///     ast::{BinaryOperator, Position},
///     interpreter::{evaluator::binary::rational::eval_rational_op, value::rational::Rational},
/// };
///
/// let pos = Position::default();
/// let half = Rational::new(1.0, 2.0, pos).unwrap();
/// let third = Rational::new(1.0, 3.0, pos).unwrap();
///
/// let sum = eval_rational_op(BinaryOperator::Add, half, third, pos).unwrap();
/// assert_eq!(sum.to_string(), "5/6");
/// ```
pub fn eval_rational_op(op: BinaryOperator,
                        left: Rational,
                        right: Rational,
                        position: Position)
                        -> EvalResult<Rational> {
    let (a, b) = (left.numerator(), left.denominator());
    let (c, d) = (right.numerator(), right.denominator());

    match op {
        BinaryOperator::Add => Rational::new(a.mul_add(d, c * b), b * d, position),
        BinaryOperator::Sub => Rational::new(a.mul_add(d, -(c * b)), b * d, position),
        BinaryOperator::Mul => Rational::new(a * c, b * d, position),
        BinaryOperator::Div => {
            if c == 0.0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            Rational::new(a * d, b * c, position)
        },
        BinaryOperator::Mod => {
            if c == 0.0 {
                return Err(RuntimeError::ModuloByZero { position });
            }
            Rational::new((a * d) % (c * b), b * d, position)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn rational(n: f64, d: f64) -> Rational {
        Rational::new(n, d, Position::default()).unwrap()
    }

    #[test]
    fn results_stay_unreduced() {
        let pos = Position::default();
        let product = eval_rational_op(BinaryOperator::Mul, rational(2.0, 3.0), rational(3.0, 4.0), pos).unwrap();
        assert_eq!(product.to_string(), "6/12");
        assert_eq!(product, rational(1.0, 2.0));

        let quotient = eval_rational_op(BinaryOperator::Div, rational(1.0, 2.0), rational(3.0, 4.0), pos).unwrap();
        assert_eq!(quotient.to_string(), "4/6");
    }

    #[test]
    fn difference_and_modulo() {
        let pos = Position::default();
        let diff = eval_rational_op(BinaryOperator::Sub, rational(1.0, 2.0), rational(1.0, 3.0), pos).unwrap();
        assert_eq!(diff.to_string(), "1/6");

        let rem = eval_rational_op(BinaryOperator::Mod, rational(7.0, 2.0), rational(1.0, 1.0), pos).unwrap();
        assert_eq!(rem, rational(1.0, 2.0));
    }

    #[test]
    fn zero_divisors_are_rejected() {
        let pos = Position::default();
        let zero = rational(0.0, 5.0);

        let err = eval_rational_op(BinaryOperator::Div, rational(1.0, 2.0), zero, pos).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);

        let err = eval_rational_op(BinaryOperator::Mod, rational(1.0, 2.0), zero, pos).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ModuloByZero);
    }
}
