use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            binary::{
                matrix::{
                    eval_matmul, eval_matrix_elementwise, eval_row_broadcast_left,
                    eval_row_broadcast_right, eval_scalar_broadcast,
                },
                rational::eval_rational_op,
                scalar::eval_scalar_op,
                vector::{eval_broadcast_left, eval_broadcast_right, eval_elementwise},
            },
            core::EvalResult,
        },
        value::{core::Value, rational::Rational},
    },
};

impl Environment {
    /// Evaluates a binary operation between two values.
    ///
    /// The handler is chosen from the runtime variants of both operands:
    ///
    /// - scalar and scalar: plain arithmetic with zero checks.
    /// - vector and vector: elementwise, lengths must match.
    /// - vector and scalar (either order): the scalar is broadcast.
    /// - matrix and matrix: `*` is the matrix product, every other operator is
    ///   elementwise over equal shapes.
    /// - matrix and vector (either order): the vector is applied to each row.
    /// - matrix and scalar (either order): the scalar is broadcast.
    /// - rational and rational: fraction arithmetic.
    /// - rational and scalar (either order): the scalar is promoted to `s/1`.
    ///
    /// Any other pairing is rejected.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source position of the operator.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use calcula::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::{environment::Environment, value::core::Value},
    /// };
    ///
    /// let left = Value::from(vec![1.0, 2.0, 3.0]);
    /// let right = Value::Scalar(2.0);
    ///
    /// let result = Environment::eval_binary(BinaryOperator::Mul, &left, &right, Position::default());
    /// assert_eq!(result.unwrap(), Value::from(vec![2.0, 4.0, 6.0]));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: Position)
                       -> EvalResult<Value> {
        use Value::{Matrix, Rational as Rat, Scalar, Vector};

        match (left, right) {
            (Scalar(a), Scalar(b)) => eval_scalar_op(op, *a, *b, position).map(Scalar),

            (Vector(a), Vector(b)) => eval_elementwise(op, a, b, position).map(Value::from),
            (Vector(a), Scalar(b)) => eval_broadcast_right(op, a, *b, position).map(Value::from),
            (Scalar(a), Vector(b)) => eval_broadcast_left(op, *a, b, position).map(Value::from),

            (Matrix(a), Matrix(b)) if op == BinaryOperator::Mul => {
                eval_matmul(a, b, position).map(Matrix)
            },
            (Matrix(a), Matrix(b)) => eval_matrix_elementwise(op, a, b, position).map(Matrix),
            (Matrix(a), Vector(b)) => eval_row_broadcast_right(op, a, b, position).map(Matrix),
            (Vector(a), Matrix(b)) => eval_row_broadcast_left(op, a, b, position).map(Matrix),
            (Matrix(a), Scalar(b)) => eval_scalar_broadcast(op, a, *b, false, position).map(Matrix),
            (Scalar(a), Matrix(b)) => eval_scalar_broadcast(op, b, *a, true, position).map(Matrix),

            (Rat(a), Rat(b)) => eval_rational_op(op, *a, *b, position).map(Rat),
            (Rat(a), Scalar(b)) => {
                eval_rational_op(op, *a, Rational::from_scalar(*b), position).map(Rat)
            },
            (Scalar(a), Rat(b)) => {
                eval_rational_op(op, Rational::from_scalar(*a), *b, position).map(Rat)
            },

            (Rat(_), Vector(_) | Matrix(_)) | (Vector(_) | Matrix(_), Rat(_)) => {
                Err(RuntimeError::IncompatibleTypes { op,
                                                      left: left.kind_name(),
                                                      right: right.kind_name(),
                                                      position })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, interpreter::value::matrix::Matrix};

    fn eval(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        Environment::eval_binary(op, left, right, Position::default())
    }

    fn matrix(rows: &[&[f64]]) -> Value {
        let rows = rows.iter().map(|r| r.to_vec()).collect();
        Matrix::new(rows, Position::default()).unwrap().into()
    }

    fn rational(n: f64, d: f64) -> Value {
        Rational::new(n, d, Position::default()).unwrap().into()
    }

    #[test]
    fn scalar_promotes_into_rational() {
        let out = eval(BinaryOperator::Add, &Value::Scalar(1.0), &rational(1.0, 2.0)).unwrap();
        assert_eq!(out.to_string(), "3/2");

        let out = eval(BinaryOperator::Div, &rational(1.0, 2.0), &Value::Scalar(2.0)).unwrap();
        assert_eq!(out.to_string(), "1/4");
    }

    #[test]
    fn rational_does_not_mix_with_containers() {
        let err = eval(BinaryOperator::Add, &rational(1.0, 2.0), &Value::from(vec![1.0])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleTypes);

        let err = eval(BinaryOperator::Mul, &matrix(&[&[1.0]]), &rational(1.0, 2.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleTypes);
    }

    #[test]
    fn matrix_multiplication_is_a_product_not_elementwise() {
        let a = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let out = eval(BinaryOperator::Mul, &a, &a).unwrap();
        assert_eq!(out, matrix(&[&[7.0, 10.0], &[15.0, 22.0]]));

        let out = eval(BinaryOperator::Add, &a, &a).unwrap();
        assert_eq!(out, matrix(&[&[2.0, 4.0], &[6.0, 8.0]]));
    }

    #[test]
    fn vector_operands_broadcast_across_rows() {
        let a = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let v = Value::from(vec![10.0, 20.0]);

        assert_eq!(eval(BinaryOperator::Add, &a, &v).unwrap(),
                   matrix(&[&[11.0, 22.0], &[13.0, 24.0]]));
        assert_eq!(eval(BinaryOperator::Add, &v, &a).unwrap(),
                   matrix(&[&[11.0, 22.0], &[13.0, 24.0]]));
    }

    #[test]
    fn scalar_modulo_by_zero() {
        let err = eval(BinaryOperator::Mod, &Value::Scalar(5.0), &Value::Scalar(0.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ModuloByZero);
    }
}
