use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::vector::{eval_broadcast_left, eval_broadcast_right, eval_elementwise},
            core::EvalResult,
        },
        value::matrix::Matrix,
    },
};

/// Computes the matrix product `left * right`.
///
/// # Errors
/// Returns `ShapeMismatch` unless `left` has as many columns as `right` has
/// rows.
///
/// # Example
/// ```
/// use calcula::{
///     ast::Position,
///     interpreter::{evaluator::binary::matrix::eval_matmul, value::matrix::Matrix},
/// };
///
/// let a = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]], Position::default()).unwrap();
/// let b = Matrix::new(vec![vec![5.0], vec![6.0]], Position::default()).unwrap();
///
/// let product = eval_matmul(&a, &b, Position::default()).unwrap();
/// assert_eq!(product.rows(), &[vec![17.0], vec![39.0]]);
/// ```
pub fn eval_matmul(left: &Matrix, right: &Matrix, position: Position) -> EvalResult<Matrix> {
    if left.column_count() != right.row_count() {
        return Err(RuntimeError::ShapeMismatch { details: format!("cannot multiply a {}x{} matrix by a {}x{} matrix",
                                                                  left.row_count(),
                                                                  left.column_count(),
                                                                  right.row_count(),
                                                                  right.column_count()),
                                                 position });
    }

    let columns = right.column_count();
    let rows = left.rows()
                   .iter()
                   .map(|row| {
                       (0..columns).map(|j| {
                                       row.iter()
                                          .zip(right.rows())
                                          .fold(0.0, |acc, (a, b_row)| a.mul_add(b_row[j], acc))
                                   })
                                   .collect()
                   })
                   .collect();

    Ok(Matrix::from_rows(rows, columns))
}

/// Applies an operator elementwise to two matrices of the same shape.
///
/// # Errors
/// - `ShapeMismatch` if the row or column counts differ.
/// - `DivisionByZero`/`ModuloByZero` from any element pair.
pub fn eval_matrix_elementwise(op: BinaryOperator,
                               left: &Matrix,
                               right: &Matrix,
                               position: Position)
                               -> EvalResult<Matrix> {
    if left.row_count() != right.row_count() || left.column_count() != right.column_count() {
        return Err(RuntimeError::ShapeMismatch { details: format!("cannot apply '{op}' to a {}x{} matrix and a {}x{} matrix",
                                                                  left.row_count(),
                                                                  left.column_count(),
                                                                  right.row_count(),
                                                                  right.column_count()),
                                                 position });
    }

    let rows = left.rows()
                   .iter()
                   .zip(right.rows())
                   .map(|(l, r)| eval_elementwise(op, l, r, position))
                   .collect::<EvalResult<Vec<_>>>()?;

    Ok(Matrix::from_rows(rows, left.column_count()))
}

/// Applies `row op vector` to every row of `matrix`.
///
/// # Errors
/// Returns `ShapeMismatch` if the vector length differs from the column count.
pub fn eval_row_broadcast_right(op: BinaryOperator,
                                matrix: &Matrix,
                                vector: &[f64],
                                position: Position)
                                -> EvalResult<Matrix> {
    check_row_length(matrix, vector, position)?;
    let rows = matrix.rows()
                     .iter()
                     .map(|row| eval_elementwise(op, row, vector, position))
                     .collect::<EvalResult<Vec<_>>>()?;

    Ok(Matrix::from_rows(rows, matrix.column_count()))
}

/// Applies `vector op row` to every row of `matrix`.
pub fn eval_row_broadcast_left(op: BinaryOperator,
                               vector: &[f64],
                               matrix: &Matrix,
                               position: Position)
                               -> EvalResult<Matrix> {
    check_row_length(matrix, vector, position)?;
    let rows = matrix.rows()
                     .iter()
                     .map(|row| eval_elementwise(op, vector, row, position))
                     .collect::<EvalResult<Vec<_>>>()?;

    Ok(Matrix::from_rows(rows, matrix.column_count()))
}

/// Applies `element op scalar` (or `scalar op element` when `scalar_first`)
/// to every element.
pub fn eval_scalar_broadcast(op: BinaryOperator,
                             matrix: &Matrix,
                             scalar: f64,
                             scalar_first: bool,
                             position: Position)
                             -> EvalResult<Matrix> {
    let rows = matrix.rows()
                     .iter()
                     .map(|row| {
                         if scalar_first {
                             eval_broadcast_left(op, scalar, row, position)
                         } else {
                             eval_broadcast_right(op, row, scalar, position)
                         }
                     })
                     .collect::<EvalResult<Vec<_>>>()?;

    Ok(Matrix::from_rows(rows, matrix.column_count()))
}

fn check_row_length(matrix: &Matrix, vector: &[f64], position: Position) -> EvalResult<()> {
    if matrix.row_count() > 0 && vector.len() != matrix.column_count() {
        return Err(RuntimeError::ShapeMismatch { details: format!("vector of length {} does not match a matrix with {} column(s)",
                                                                  vector.len(),
                                                                  matrix.column_count()),
                                                 position });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn matrix(rows: &[&[f64]]) -> Matrix {
        Matrix::new(rows.iter().map(|r| r.to_vec()).collect(), Position::default()).unwrap()
    }

    #[test]
    fn product_is_not_commutative() {
        let a = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = matrix(&[&[0.0, 1.0], &[1.0, 0.0]]);
        let pos = Position::default();

        let ab = eval_matmul(&a, &b, pos).unwrap();
        let ba = eval_matmul(&b, &a, pos).unwrap();

        assert_eq!(ab, matrix(&[&[2.0, 1.0], &[4.0, 3.0]]));
        assert_eq!(ba, matrix(&[&[3.0, 4.0], &[1.0, 2.0]]));
    }

    #[test]
    fn product_requires_conformable_shapes() {
        let a = matrix(&[&[1.0, 2.0, 3.0]]);
        let err = eval_matmul(&a, &a, Position::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn division_is_elementwise() {
        let a = matrix(&[&[4.0, 9.0]]);
        let b = matrix(&[&[2.0, 3.0]]);
        let out = eval_matrix_elementwise(BinaryOperator::Div, &a, &b, Position::default()).unwrap();
        assert_eq!(out, matrix(&[&[2.0, 3.0]]));

        let zero = matrix(&[&[1.0, 0.0]]);
        let err = eval_matrix_elementwise(BinaryOperator::Div, &a, &zero, Position::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }

    #[test]
    fn row_broadcast_checks_column_count() {
        let m = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let pos = Position::default();

        let out = eval_row_broadcast_right(BinaryOperator::Sub, &m, &[1.0, 1.0], pos).unwrap();
        assert_eq!(out, matrix(&[&[0.0, 1.0], &[2.0, 3.0]]));

        let out = eval_row_broadcast_left(BinaryOperator::Sub, &[10.0, 10.0], &m, pos).unwrap();
        assert_eq!(out, matrix(&[&[9.0, 8.0], &[7.0, 6.0]]));

        let err = eval_row_broadcast_right(BinaryOperator::Add, &m, &[1.0], pos).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn scalar_broadcast_respects_operand_order() {
        let m = matrix(&[&[2.0, 4.0]]);
        let pos = Position::default();

        assert_eq!(eval_scalar_broadcast(BinaryOperator::Div, &m, 2.0, false, pos).unwrap(),
                   matrix(&[&[1.0, 2.0]]));
        assert_eq!(eval_scalar_broadcast(BinaryOperator::Div, &m, 8.0, true, pos).unwrap(),
                   matrix(&[&[4.0, 2.0]]));
    }
}
