use std::rc::Rc;

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// A rectangular grid of numbers stored as rows.
///
/// Every row has exactly [`Matrix::column_count`] elements. A matrix with zero
/// rows has zero columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows:    Rc<Vec<Vec<f64>>>,
    columns: usize,
}

impl Matrix {
    /// Builds a matrix from its rows.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if the rows do not all have the same length.
    ///
    /// # Example
    /// ```
    /// use calcula::{ast::Position, interpreter::value::matrix::Matrix};
    ///
    /// let m = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]], Position::default()).unwrap();
    /// assert_eq!(m.row_count(), 2);
    /// assert_eq!(m.column_count(), 2);
    ///
    /// assert!(Matrix::new(vec![vec![1.0], vec![2.0, 3.0]], Position::default()).is_err());
    /// ```
    pub fn new(rows: Vec<Vec<f64>>, position: Position) -> EvalResult<Self> {
        let columns = rows.first().map_or(0, Vec::len);

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != columns) {
            return Err(RuntimeError::ShapeMismatch { details: format!("row {} has {} element(s), expected {columns}",
                                                                      index + 1,
                                                                      row.len()),
                                                     position });
        }

        Ok(Self { rows: Rc::new(rows),
                  columns })
    }

    /// Builds a matrix from rows already known to have `columns` elements
    /// each, such as the output of an elementwise operation.
    pub(crate) fn from_rows(rows: Vec<Vec<f64>>, columns: usize) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == columns));
        let columns = if rows.is_empty() { 0 } else { columns };
        Self { rows: Rc::new(rows),
               columns }
    }

    /// The rows of the matrix.
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.columns
    }

    /// Applies `f` to every element.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
        where F: Fn(f64) -> f64
    {
        let rows = self.rows
                       .iter()
                       .map(|row| row.iter().copied().map(&f).collect())
                       .collect();
        Self::from_rows(rows, self.columns)
    }

    /// Swaps rows and columns.
    ///
    /// # Example
    /// ```
    /// use calcula::{ast::Position, interpreter::value::matrix::Matrix};
    ///
    /// let m = Matrix::new(vec![vec![1.0, 2.0, 3.0]], Position::default()).unwrap();
    /// let t = m.transpose();
    ///
    /// assert_eq!(t.rows(), &[vec![1.0], vec![2.0], vec![3.0]]);
    /// ```
    #[must_use]
    pub fn transpose(&self) -> Self {
        let rows = self.row_count();
        let mut columns: Vec<Vec<f64>> = (0..self.columns).map(|_| Vec::with_capacity(rows)).collect();

        for row in self.rows.iter() {
            for (column, element) in columns.iter_mut().zip(row) {
                column.push(*element);
            }
        }

        Self::from_rows(columns, rows)
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write_row(f, row)?;
        }
        write!(f, "]")
    }
}

/// Writes a row of numbers as `[a, b, c]`.
pub(crate) fn write_row(f: &mut std::fmt::Formatter<'_>, row: &[f64]) -> std::fmt::Result {
    write!(f, "[")?;
    for (index, value) in row.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{value}")?;
    }
    write!(f, "]")
}
